//! Manifest generation pipeline.
//!
//! The orchestrator behind `appcache-gen build`. Runs the stages in a fixed
//! order and stops at the first failure:
//!
//! ```text
//! validate    target directory must exist (fails before any write)
//! read        manifest template + entry HTML
//! enumerate   ordered, filtered file list (scan)
//! patch       insert the manifest attribute, write the HTML back
//! digest      sequential SHA-1 chain over the file set (digest)
//! assemble    fill the template (assemble), write <dir>/manifest.appcache
//! ```
//!
//! The entry HTML is written *before* digesting starts. A digest failure
//! still fails the run, but the HTML write is not rolled back — there is no
//! backup and no retry. Either both artifacts end up written, or the run
//! reports failure (possibly with the HTML already mutated).
//!
//! All stage errors funnel into [`GenerateError`]; presentation is the
//! caller's job.

use crate::config::AppcacheConfig;
use crate::{assemble, digest, patch, scan, template};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file name, fixed by the attribute the HTML patch inserts.
pub const MANIFEST_FILENAME: &str = "manifest.appcache";

/// Bundled manifest template, used when the config names no custom one.
const DEFAULT_TEMPLATE: &str = include_str!("../static/manifest.template");

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("target directory does not exist: {0}")]
    MissingDir(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] scan::ScanError),
    #[error("Digest error: {0}")]
    Digest(#[from] digest::DigestError),
    #[error("Template error: {0}")]
    Template(#[from] template::TemplateError),
}

/// What a build run produced. Serialized as-is by `build --json`.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    /// Target directory the manifest was generated for.
    pub dir: String,
    /// Master digest written into the manifest.
    pub stamp: String,
    /// Cache entries in manifest order (enumerated files, then extras).
    pub entries: Vec<String>,
    /// Count of enumerated files (entries minus extras).
    pub enumerated: usize,
    /// Rendered fallback lines in manifest order.
    pub fallbacks: Vec<String>,
    /// Entry HTML file that was patched.
    pub html_path: String,
    /// False when the HTML already carried the manifest attribute.
    pub html_changed: bool,
    /// Path of the written manifest.
    pub manifest_path: String,
}

/// Result of a dry `check` run: what a build would consume.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub dir: String,
    pub html_path: String,
    /// `"bundled"` or the configured template path.
    pub template: String,
    pub file_count: usize,
}

/// Run the full pipeline: patch the entry HTML and write the manifest.
pub fn generate(config: &AppcacheConfig) -> Result<BuildReport, GenerateError> {
    let dir = Path::new(&config.dir);
    if !dir.is_dir() {
        return Err(GenerateError::MissingDir(dir.to_path_buf()));
    }

    let manifest_template = load_template(config)?;
    let html_path = dir.join(&config.html_path);
    let html = fs::read_to_string(&html_path)?;

    let files = scan::list_files(dir, &config.exclude)?;

    // HTML first: written before digesting, never rolled back.
    let patched = patch::insert_manifest_attr(&html);
    let html_changed = patched.changed;
    fs::write(&html_path, patched.html)?;

    let stamp = digest::master_digest(&files)?;

    let manifest = assemble::assemble(
        &manifest_template,
        &files,
        dir,
        &config.extras,
        &config.fallbacks,
        &stamp,
    )?;
    let manifest_path = dir.join(MANIFEST_FILENAME);
    fs::write(&manifest_path, manifest)?;

    Ok(BuildReport {
        dir: config.dir.clone(),
        stamp,
        entries: assemble::cache_entries(&files, dir, &config.extras),
        enumerated: files.len(),
        fallbacks: assemble::fallback_lines(&config.fallbacks),
        html_path: html_path.display().to_string(),
        html_changed,
        manifest_path: manifest_path.display().to_string(),
    })
}

/// Validate inputs and report what a build would consume. Zero writes.
pub fn check(config: &AppcacheConfig) -> Result<CheckReport, GenerateError> {
    let dir = Path::new(&config.dir);
    if !dir.is_dir() {
        return Err(GenerateError::MissingDir(dir.to_path_buf()));
    }

    load_template(config)?;
    let html_path = dir.join(&config.html_path);
    fs::read_to_string(&html_path)?;

    let files = scan::list_files(dir, &config.exclude)?;

    Ok(CheckReport {
        dir: config.dir.clone(),
        html_path: html_path.display().to_string(),
        template: config
            .manifest_template
            .clone()
            .unwrap_or_else(|| "bundled".to_string()),
        file_count: files.len(),
    })
}

/// Compute the master digest for the target directory. Zero writes.
pub fn stamp(config: &AppcacheConfig) -> Result<String, GenerateError> {
    let dir = Path::new(&config.dir);
    if !dir.is_dir() {
        return Err(GenerateError::MissingDir(dir.to_path_buf()));
    }

    let files = scan::list_files(dir, &config.exclude)?;
    Ok(digest::master_digest(&files)?)
}

/// The manifest template text: configured file or the bundled default.
fn load_template(config: &AppcacheConfig) -> Result<String, GenerateError> {
    match &config.manifest_template {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(DEFAULT_TEMPLATE.to_string()),
    }
}
