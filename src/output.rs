//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! Layout follows a two-level pattern: a header line naming the thing, then
//! indented context lines under it.
//!
//! ```text
//! Cache entries (3 files, 2 extras)
//!     index.html
//!     css/site.css
//!     js/app.js
//!     x.js
//!     y.js
//! Fallbacks
//!     / /offline.html
//! Stamp: DOE7uGb7qmCXnVj0oHh5piGbhO4=
//! Patched www-built/index.html
//! Wrote www-built/manifest.appcache
//! ```

use crate::generate::{BuildReport, CheckReport};

/// Indentation for context lines: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the result of a build run.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    let extras = report.entries.len() - report.enumerated;
    lines.push(if extras > 0 {
        format!(
            "Cache entries ({} files, {} extras)",
            report.enumerated, extras
        )
    } else {
        format!("Cache entries ({} files)", report.enumerated)
    });
    for entry in &report.entries {
        lines.push(format!("{}{}", indent(1), entry));
    }

    if !report.fallbacks.is_empty() {
        lines.push("Fallbacks".to_string());
        for fallback in &report.fallbacks {
            lines.push(format!("{}{}", indent(1), fallback));
        }
    }

    lines.push(format!("Stamp: {}", report.stamp));
    lines.push(if report.html_changed {
        format!("Patched {}", report.html_path)
    } else {
        format!("Unchanged {} (already carries the manifest attribute)", report.html_path)
    });
    lines.push(format!("Wrote {}", report.manifest_path));

    lines
}

/// Format the result of a check run.
pub fn format_check_output(report: &CheckReport) -> Vec<String> {
    vec![
        format!("Target: {}", report.dir),
        format!("{}Entry HTML: {}", indent(1), report.html_path),
        format!("{}Template: {}", indent(1), report.template),
        format!("{}{} cacheable files", indent(1), report.file_count),
    ]
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

pub fn print_check_output(report: &CheckReport) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}
