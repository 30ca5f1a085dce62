//! SHA-256 file hasher with streaming support.
//!
//! # Overview
//!
//! Computes content digests by streaming a file through SHA-256 in fixed
//! 64 KiB chunks, so peak memory stays bounded regardless of file size.
//! Two files with equal digests are treated as content-identical.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest as Sha2Digest, Sha256};

use super::HashError;

/// Content digest: a SHA-256 hash output.
pub type Digest = [u8; 32];

/// Read chunk size for streaming hashing (64 KiB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file's full byte content.
///
/// The file handle is scoped to this function and released on every exit
/// path, including read failures.
///
/// # Errors
///
/// Returns [`HashError`] if the file cannot be opened or read.
pub fn hash_file(path: &Path) -> Result<Digest, HashError> {
    let mut file =
        File::open(path).map_err(|e| HashError::from_io(path.to_path_buf(), e))?;

    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file
            .read(&mut buf)
            .map_err(|e| HashError::from_io(path.to_path_buf(), e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hasher.finalize().into())
}

/// Convert a digest to its lowercase hexadecimal string form.
#[must_use]
pub fn digest_to_hex(digest: &Digest) -> String {
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
