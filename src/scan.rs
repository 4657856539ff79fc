//! Deterministic file enumeration.
//!
//! First step of the manifest pipeline: walk the built site directory and
//! produce the ordered list of files the manifest will cache. The order is
//! load-bearing — the digest chain combines per-file digests in exactly this
//! order, so enumeration must be stable across runs over unchanged contents
//! or the stamp would churn without any content change.
//!
//! Ordering comes from `walkdir` with `sort_by_file_name()`: byte-wise
//! file-name sort at every directory level, depth-first. The same tree
//! always enumerates the same way, on any platform.
//!
//! ## Exclusion
//!
//! A file is skipped when its name contains any configured fragment
//! (default: `.htaccess`). Matching is on the file name only, not the full
//! path, so `exclude = ["secret"]` does not hide `secret-album/photo.jpg`.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Enumerate all files under `dir`, depth-first, file names sorted at each
/// level, minus files whose name contains an `exclude` fragment.
///
/// Returns absolute paths when `dir` is absolute, `dir`-prefixed paths
/// otherwise. Directories themselves are not listed.
pub fn list_files(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| ScanError::Walk {
            path: dir.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_excluded(entry.file_name().to_string_lossy().as_ref(), exclude) {
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

/// True when the file name contains any exclusion fragment.
fn is_excluded(file_name: &str, exclude: &[String]) -> bool {
    exclude.iter().any(|frag| file_name.contains(frag))
}
