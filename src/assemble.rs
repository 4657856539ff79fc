//! Manifest text assembly.
//!
//! Turns the enumerated file set, the configured extras and fallbacks, and
//! the master digest into the final `manifest.appcache` text by filling the
//! three template placeholders:
//!
//! - `{files}` — newline-joined app-relative cache entries
//! - `{stamp}` — the master digest
//! - `{fallback}` — newline-joined `"<resource> <fallback>"` lines
//!
//! Ordering is preserved end to end: enumerated files first (enumeration
//! order), then extras (configured order); fallbacks in configured order.
//!
//! The template's CACHE/FALLBACK/NETWORK sectioning is an authoring
//! convention — nothing here validates it.

use crate::config::Fallback;
use crate::template::{self, TemplateError};
use std::path::{Path, PathBuf};

/// Convert an enumerated path to its app-relative manifest entry by
/// stripping the target directory prefix. Separators are normalized to
/// `/` — manifests are URLs, not filesystem paths.
///
/// A path outside `dir` is kept whole; enumeration only ever yields paths
/// under `dir`, so this is a display fallback, not a correctness hinge.
pub fn app_relative(path: &Path, dir: &Path) -> String {
    match path.strip_prefix(dir) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

/// The full cache entry list: app-relative enumerated files, then extras.
pub fn cache_entries(files: &[PathBuf], dir: &Path, extras: &[String]) -> Vec<String> {
    let mut entries: Vec<String> = files.iter().map(|f| app_relative(f, dir)).collect();
    entries.extend(extras.iter().cloned());
    entries
}

/// One `"<resource> <fallback>"` line per mapping, configured order.
pub fn fallback_lines(fallbacks: &[Fallback]) -> Vec<String> {
    fallbacks
        .iter()
        .map(|f| format!("{} {}", f.resource, f.fallback))
        .collect()
}

/// Fill the manifest template with the file list, stamp and fallbacks.
pub fn assemble(
    template: &str,
    files: &[PathBuf],
    dir: &Path,
    extras: &[String],
    fallbacks: &[Fallback],
    stamp: &str,
) -> Result<String, TemplateError> {
    let files_text = cache_entries(files, dir, extras).join("\n");
    let fallback_text = fallback_lines(fallbacks).join("\n");

    template::render(
        template,
        &[
            ("files", &files_text),
            ("stamp", stamp),
            ("fallback", &fallback_text),
        ],
    )
}
