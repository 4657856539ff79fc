//! Literal text-template substitution.
//!
//! Templates are plain text with `{word}` placeholders. Rendering replaces
//! every placeholder with its configured value — nothing more. No
//! conditionals, no loops, no escaping: manifest templates are trusted
//! build inputs, not user content.
//!
//! A placeholder naming a key with no value is an error rather than being
//! passed through — a template typo should fail the build, not ship a
//! literal `{stmap}` to browsers. Braces that don't form a `{word}` token
//! are left untouched.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template references unknown placeholder {{{0}}}")]
    UnknownPlaceholder(String),
}

/// `{word}` tokens: word characters only, so stray braces in surrounding
/// text never parse as placeholders.
fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\w+)\}").unwrap())
}

/// Replace every `{key}` token in `template` with its value.
pub fn render(template: &str, values: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for caps in token_re().captures_iter(template) {
        let token = caps.get(0).unwrap();
        let key = &caps[1];
        let value = values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .ok_or_else(|| TemplateError::UnknownPlaceholder(key.to_string()))?;

        out.push_str(&template[last..token.start()]);
        out.push_str(value);
        last = token.end();
    }
    out.push_str(&template[last..]);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_a_single_token() {
        let out = render("stamp: {stamp}", &[("stamp", "abc=")]).unwrap();
        assert_eq!(out, "stamp: abc=");
    }

    #[test]
    fn substitutes_repeated_and_multiple_tokens() {
        let out = render(
            "{a} {b} {a}",
            &[("a", "one"), ("b", "two")],
        )
        .unwrap();
        assert_eq!(out, "one two one");
    }

    #[test]
    fn value_may_span_multiple_lines() {
        let out = render("CACHE:\n{files}\n", &[("files", "a.js\nb.css")]).unwrap();
        assert_eq!(out, "CACHE:\na.js\nb.css\n");
    }

    #[test]
    fn empty_value_substitutes_to_nothing() {
        let out = render("FALLBACK:\n{fallback}\n", &[("fallback", "")]).unwrap();
        assert_eq!(out, "FALLBACK:\n\n");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = render("{files} {stmap}", &[("files", "x"), ("stamp", "y")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "template references unknown placeholder {stmap}"
        );
    }

    #[test]
    fn non_token_braces_pass_through() {
        let out = render("body { color: red } {k}", &[("k", "v")]).unwrap();
        assert_eq!(out, "body { color: red } v");
    }

    #[test]
    fn text_without_tokens_is_unchanged() {
        let out = render("CACHE MANIFEST\n*\n", &[]).unwrap();
        assert_eq!(out, "CACHE MANIFEST\n*\n");
    }
}
