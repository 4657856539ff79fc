//! # appcache-gen
//!
//! Generates an HTML5 application cache manifest for a built static-site
//! directory. One run produces two artifacts: the entry HTML gains a
//! `manifest="manifest.appcache"` attribute on its `<html>` tag, and
//! `<dir>/manifest.appcache` is written with a content-derived version
//! stamp, the cacheable file list, and any fallback mappings.
//!
//! # Architecture: One Pass, Fixed Stage Order
//!
//! ```text
//! validate   target directory must exist
//! read       manifest template + entry HTML
//! enumerate  deterministic, filtered, ordered file list
//! patch      insert the manifest attribute, write HTML back
//! digest     sequential SHA-1 chain -> one master stamp
//! assemble   fill the template, write manifest.appcache
//! ```
//!
//! The first failure aborts the run; there are no retries and no rollback
//! (the HTML write lands before digesting and stays put on later failure).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | walks the built site, produces the ordered cacheable file list |
//! | [`digest`] | per-file SHA-1 digests folded into the order-sensitive master stamp |
//! | [`assemble`] | app-relative entries, fallback lines, template fill |
//! | [`patch`] | inserts the `manifest` attribute into the entry HTML |
//! | [`template`] | literal `{key}` placeholder substitution |
//! | [`generate`] | the orchestrator: `build`, `check` and `stamp` entry points |
//! | [`config`] | `appcache.toml` loading, defaults, validation |
//! | [`output`] | CLI display formatting |
//!
//! # Design Decisions
//!
//! ## The Stamp Is Order-Sensitive
//!
//! Each file is hashed alone (SHA-1, base64), then the digests are joined
//! with `","` in enumeration order and hashed again. Reordering the list
//! changes the stamp even with identical contents — which is why
//! enumeration sorts file names at every directory level and never relies
//! on readdir order. Identical trees always stamp identically; any byte
//! change anywhere invalidates the browser's cache.
//!
//! ## Sequential, Streaming Hashing
//!
//! Files are hashed one at a time through a fixed buffer. A build-time tool
//! that runs once per deploy has nothing to gain from parallel hashing, and
//! the sequential fold makes the combination order a non-question. Memory
//! is bounded by one read buffer regardless of site size.
//!
//! ## Regex Patch, Not an HTML Parser
//!
//! The entry HTML is patched with a scoped regex transform: find `<html`,
//! insert the attribute, collapse the one malformed artifact the insertion
//! can leave behind. Pulling in an HTML parser to add a single attribute to
//! a file this tool's own pipeline built would be machinery without a
//! payoff. The transform skips documents that already carry the attribute,
//! so rebuilds are idempotent.
//!
//! ## Templates Are Data
//!
//! The manifest layout lives in a plain-text template with three
//! placeholders (`{files}`, `{stamp}`, `{fallback}`) — the bundled default
//! is compiled in, and `manifest_template` swaps in a site-specific one
//! without touching the tool. Section order, comments, and the NETWORK
//! wildcard are template-authoring choices the pipeline never inspects.

pub mod assemble;
pub mod config;
pub mod digest;
pub mod generate;
pub mod output;
pub mod patch;
pub mod scan;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
