//! Shared test utilities for the appcache-gen test suite.
//!
//! Unit tests build their fixtures in a `TempDir` they own — no shared
//! fixture directory, no cross-test state.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::AppcacheConfig;

/// Write `contents` to `root/rel`, creating parent directories. Returns the
/// full path.
pub fn write_file(root: &Path, rel: &str, contents: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// Paths relative to `root`, `/`-separated, for order assertions.
pub fn rel_names(files: &[PathBuf], root: &Path) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

/// A minimal built site: entry HTML, a stylesheet, a script, and an
/// `.htaccess` that default exclusion should drop.
pub fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "index.html",
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><title>Site</title></head>\n<body></body>\n</html>\n",
    );
    write_file(tmp.path(), "css/site.css", "body { margin: 0 }\n");
    write_file(tmp.path(), "js/app.js", "console.log('hi');\n");
    write_file(tmp.path(), ".htaccess", "Deny from all\n");
    tmp
}

/// Stock config pointed at a fixture site.
pub fn site_config(tmp: &TempDir) -> AppcacheConfig {
    AppcacheConfig {
        dir: tmp.path().display().to_string(),
        ..AppcacheConfig::default()
    }
}
