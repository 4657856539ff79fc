//! Sequential content digest chain.
//!
//! The manifest stamp is a single base64 SHA-1 value derived from every
//! cached file: each file is hashed on its own, then the per-file digests
//! are joined with `","` in enumeration order and hashed once more. Any
//! content change in any file changes the stamp, and so does reordering the
//! file list with identical contents — order is part of the value.
//!
//! Files are hashed **strictly sequentially**: file *i* is fully read and
//! digested before file *i+1* is opened. Combined with streaming reads this
//! bounds memory to one fixed buffer regardless of site size, and makes the
//! combination order trivially deterministic. Throughput is a non-goal —
//! this runs once per build.
//!
//! Failure anywhere aborts the chain; no partial digest list escapes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no files to digest - the file set is empty")]
    EmptyFileSet,
}

/// Streaming read buffer size. 64 KiB keeps syscall count low without
/// holding more than one block in memory.
const READ_BUF_SIZE: usize = 64 * 1024;

/// SHA-1 digest of a file's contents, base64-encoded.
///
/// The file is streamed through a fixed buffer, never loaded whole.
pub fn file_digest(path: &Path) -> Result<String, DigestError> {
    let io_err = |source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let mut hasher = Sha1::new();
    let mut buf = [0u8; READ_BUF_SIZE];

    loop {
        let n = file.read(&mut buf).map_err(io_err)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(BASE64.encode(hasher.finalize()))
}

/// Master digest over an ordered file set.
///
/// Hashes each file in turn via [`file_digest`], then returns the base64
/// SHA-1 of the comma-joined per-file digest strings. The empty set has no
/// defined digest and is rejected.
pub fn master_digest(files: &[PathBuf]) -> Result<String, DigestError> {
    if files.is_empty() {
        return Err(DigestError::EmptyFileSet);
    }

    let mut digests = Vec::with_capacity(files.len());
    for file in files {
        digests.push(file_digest(file)?);
    }

    Ok(combine_digests(&digests))
}

/// SHA-1 over the comma-joined digest strings, base64-encoded.
fn combine_digests(digests: &[String]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(digests.join(",").as_bytes());
    BASE64.encode(hasher.finalize())
}
