//! Entry-HTML manifest attribute patching.
//!
//! Adds `manifest="manifest.appcache"` to the document's `<html>` tag so the
//! browser discovers the manifest. This is a scoped text transform over the
//! raw document, not an HTML parser: two regex passes, nothing else.
//!
//! 1. Every `<html` tag opening (with or without existing attributes) gets
//!    the manifest attribute inserted right after the tag name.
//! 2. The insertion leaves a `" >` artifact when the tag had no attributes
//!    (`<html>`); a second pass collapses `manifest.appcache" >` back to
//!    `manifest.appcache">`.
//!
//! A document that already carries the attribute is returned untouched, so
//! rebuilding a site never stacks duplicate attributes.

use regex::Regex;
use std::sync::OnceLock;

/// The exact attribute the patch inserts, also used as the already-patched
/// sentinel.
pub const MANIFEST_ATTR: &str = r#"manifest="manifest.appcache""#;

/// Result of one patch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub html: String,
    /// False when the document was already patched or has no `<html` tag.
    pub changed: bool,
}

fn open_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<html\s?").unwrap())
}

fn artifact_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"manifest\.appcache"\s>"#).unwrap())
}

/// Insert the manifest attribute into the document's `<html>` tag.
///
/// One attempt per run; the caller overwrites the entry file with the
/// returned text. No `<html` tag means no change.
pub fn insert_manifest_attr(html: &str) -> Patched {
    if html.contains(MANIFEST_ATTR) {
        return Patched {
            html: html.to_string(),
            changed: false,
        };
    }

    let inserted = open_tag_re().replace_all(html, r#"<html manifest="manifest.appcache" "#);
    let repaired = artifact_re().replace_all(&inserted, r#"manifest.appcache">"#);

    let changed = repaired != html;
    Patched {
        html: repaired.into_owned(),
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patches_tag_with_attributes() {
        let out = insert_manifest_attr(r#"<!DOCTYPE html><html lang="en"><body></body></html>"#);
        assert!(out.changed);
        assert_eq!(
            out.html,
            r#"<!DOCTYPE html><html manifest="manifest.appcache" lang="en"><body></body></html>"#
        );
    }

    #[test]
    fn patches_bare_tag_without_leaving_artifact() {
        let out = insert_manifest_attr("<html><head></head></html>");
        assert!(out.changed);
        assert_eq!(
            out.html,
            r#"<html manifest="manifest.appcache"><head></head></html>"#
        );
    }

    #[test]
    fn patching_is_idempotent() {
        let once = insert_manifest_attr(r#"<html lang="en"></html>"#);
        let twice = insert_manifest_attr(&once.html);

        assert!(!twice.changed);
        assert_eq!(twice.html, once.html);
        assert_eq!(twice.html.matches(MANIFEST_ATTR).count(), 1);
    }

    #[test]
    fn document_without_html_tag_is_unchanged() {
        let fragment = "<body><p>partial</p></body>";
        let out = insert_manifest_attr(fragment);
        assert!(!out.changed);
        assert_eq!(out.html, fragment);
    }

    #[test]
    fn newline_after_tag_name_is_accepted() {
        // The single consumed newline becomes part of the inserted text;
        // remaining indentation is left alone.
        let out = insert_manifest_attr("<html\n  lang=\"en\">\n</html>");
        assert!(out.changed);
        assert!(out.html.starts_with(r#"<html manifest="manifest.appcache" "#));
        assert!(out.html.contains(r#"lang="en">"#));
        assert_eq!(out.html.matches(MANIFEST_ATTR).count(), 1);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let shouting = "<HTML></HTML>";
        let out = insert_manifest_attr(shouting);
        assert!(!out.changed);
        assert_eq!(out.html, shouting);
    }

    #[test]
    fn preexisting_artifact_survives_when_already_patched() {
        // The sentinel check fires before the repair pass ever runs.
        let html = r#"<html manifest="manifest.appcache" ></html>"#;
        let out = insert_manifest_attr(html);
        assert!(!out.changed);
        assert_eq!(out.html, html);
    }
}
