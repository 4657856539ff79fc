//! Tool configuration module.
//!
//! Handles loading and validating `appcache.toml`. Every option is optional;
//! user config files are sparse overrides on top of stock defaults. Unknown
//! keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! dir = "www-built"              # Built site directory to cache
//! html_path = "index.html"       # Entry HTML file, relative to dir
//! # manifest_template = "my.template"  # Omit to use the bundled template
//! extras = []                    # Extra cache paths appended to the file list
//! exclude = [".htaccess"]        # File-name fragments skipped by enumeration
//!
//! # Fallback resources, rendered in the order written here
//! # [[fallbacks]]
//! # resource = "/app"
//! # fallback = "/offline.html"
//! ```
//!
//! ## Ordering
//!
//! `extras` and `fallbacks` are arrays: the manifest preserves the order
//! they are written in. This matters — reordering entries changes the
//! manifest text (though not the stamp, which covers file contents only).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// A fallback resource mapping: serve `fallback` when `resource` is
/// unreachable. Rendered as one `"<resource> <fallback>"` manifest line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Fallback {
    pub resource: String,
    pub fallback: String,
}

/// Tool configuration loaded from `appcache.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppcacheConfig {
    /// Built site directory whose contents get cached.
    pub dir: String,
    /// Entry HTML file that receives the `manifest` attribute, relative to `dir`.
    pub html_path: String,
    /// Path to a custom manifest template. `None` uses the bundled template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_template: Option<String>,
    /// Extra cache paths appended after the enumerated file list, in order.
    pub extras: Vec<String>,
    /// Fallback resource mappings, rendered in order.
    pub fallbacks: Vec<Fallback>,
    /// File-name fragments excluded from enumeration.
    pub exclude: Vec<String>,
}

fn default_dir() -> String {
    "www-built".to_string()
}

fn default_html_path() -> String {
    "index.html".to_string()
}

fn default_exclude() -> Vec<String> {
    vec![".htaccess".to_string()]
}

impl Default for AppcacheConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            html_path: default_html_path(),
            manifest_template: None,
            extras: Vec::new(),
            fallbacks: Vec::new(),
            exclude: default_exclude(),
        }
    }
}

impl AppcacheConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dir.is_empty() {
            return Err(ConfigError::Validation("dir must not be empty".into()));
        }
        if self.html_path.is_empty() {
            return Err(ConfigError::Validation(
                "html_path must not be empty".into(),
            ));
        }
        if self.exclude.iter().any(|e| e.is_empty()) {
            return Err(ConfigError::Validation(
                "exclude entries must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Normalize values that are resolved once at load time.
    ///
    /// Strips any trailing slash from `dir` so path joins and the
    /// app-relative mapping see a clean directory name.
    fn normalize(&mut self) {
        while self.dir.ends_with('/') || self.dir.ends_with('\\') {
            self.dir.pop();
        }
    }

    /// Apply CLI overrides, then re-normalize and re-validate.
    pub fn apply_overrides(
        &mut self,
        dir: Option<String>,
        html_path: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(dir) = dir {
            self.dir = dir;
        }
        if let Some(html_path) = html_path {
            self.html_path = html_path;
        }
        self.normalize();
        self.validate()
    }
}

/// Load configuration from `appcache.toml` in the given directory.
///
/// A missing config file yields the stock defaults; a present but invalid
/// file is an error (silent fallback would mask typos).
pub fn load_config(root: &Path) -> Result<AppcacheConfig, ConfigError> {
    let config_path = root.join("appcache.toml");
    if config_path.exists() {
        load_config_file(&config_path)
    } else {
        Ok(AppcacheConfig::default())
    }
}

/// Load configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<AppcacheConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: AppcacheConfig = toml::from_str(&content)?;
    config.normalize();
    config.validate()?;
    Ok(config)
}

/// Stock `appcache.toml` with all options documented.
///
/// Printed by `appcache-gen gen-config` so users start from a commented
/// file instead of the docs.
pub fn stock_config_toml() -> String {
    r#"# appcache-gen configuration
# All options are optional - defaults shown below.

# Built site directory whose contents get cached.
dir = "www-built"

# Entry HTML file that receives the manifest attribute, relative to dir.
html_path = "index.html"

# Path to a custom manifest template. The template is plain text with three
# placeholders substituted at build time: {files}, {stamp} and {fallback}.
# Omit to use the bundled template.
# manifest_template = "manifest.template"

# Extra cache paths appended after the enumerated file list, in order.
# These are written into the manifest as-is (no existence check, no hashing).
extras = []

# File-name fragments excluded from enumeration. A file is skipped when its
# name contains any of these fragments. When rebuilding in place (the dir is
# not regenerated between builds), add "manifest.appcache" so the previous
# run's manifest stays out of the digest.
exclude = [".htaccess"]

# Fallback resources, one block per mapping, rendered in the order written.
# [[fallbacks]]
# resource = "/app"
# fallback = "/offline.html"
"#
    .to_string()
}
