//! Digest computation with lowercase hex output.
//!
//! Strings, files and arbitrary readers can be hashed with MD5, SHA-1 or
//! SHA-256. Input is consumed in 256-byte reads and every read feeds exactly
//! the bytes it returned into the digest.
//!
//! # Supported Hash Types
//!
//! - **MD5**: 32 hex characters (e.g. "d41d8cd98f00b204e9800998ecf8427e")
//! - **SHA-1**: 40 hex characters
//! - **SHA-256**: 64 hex characters
//!
//! # Examples
//!
//! ```rust
//! use attribute_util::hash::{hash_str, HashAlgorithm};
//!
//! assert_eq!(
//!     hash_str("abc", HashAlgorithm::Sha1),
//!     "a9993e364706816aba3e25717850c26c9cd0d89d"
//! );
//! ```
//!
//! ## File Verification
//!
//! ```rust,no_run
//! use attribute_util::hash::verify_file;
//! use std::path::Path;
//!
//! match verify_file(Path::new("downloaded_file.zip"), Some("d41d8cd98f00b204e9800998ecf8427e")) {
//!     Ok(true) => println!("Hash verification passed!"),
//!     Ok(false) => println!("Hash verification failed!"),
//!     Err(e) => println!("Error during verification: {}", e),
//! }
//! ```

pub mod algorithm;

pub use algorithm::HashAlgorithm;

use crate::error::Result;
use crate::logging::{self, HASHING};

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::{error, trace};

/// Size of each read from the input.
pub const CHUNK_SIZE: usize = 256;

/// Hash the UTF-8 bytes of `text`.
pub fn hash_str(text: &str, algorithm: HashAlgorithm) -> String {
    trace!(target: HASHING, "Hashing string {} as {}", text, algorithm);
    hash_bytes(text.as_bytes(), algorithm)
}

/// Hash an in-memory buffer.
pub fn hash_bytes(bytes: &[u8], algorithm: HashAlgorithm) -> String {
    let mut hasher = algorithm.hasher();
    hasher.update(bytes);
    to_hex(&hasher.finalize())
}

/// Hash the contents of the file at `path`.
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> Result<String> {
    trace!(target: HASHING, "Hashing file {} as {}", path.display(), algorithm);
    let file = File::open(path)?;
    hash_reader(BufReader::new(file), algorithm)
}

/// Hash everything `input` yields until end of stream.
///
/// Read errors are returned as they happen; the caller owns `input` and is
/// responsible for closing it.
pub fn hash_reader<R: Read>(mut input: R, algorithm: HashAlgorithm) -> Result<String> {
    let mut hasher = algorithm.hasher();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let read = match input.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(to_hex(&hasher.finalize()))
}

/// Hash `input` with the algorithm called `name`.
///
/// An unknown name is logged and yields `Ok(None)`; read errors are still
/// returned.
pub fn hash_named<R: Read>(input: R, name: &str) -> Result<Option<String>> {
    match name.parse::<HashAlgorithm>() {
        Ok(algorithm) => hash_reader(input, algorithm).map(Some),
        Err(e) => {
            error!(
                target: HASHING,
                "{}",
                logging::error_chain(&format!("Hashing as {} failed:", name), &e)
            );
            Ok(None)
        }
    }
}

/// Lowercase hex, two digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Verify the digest of a local file against an expected hex string.
///
/// The algorithm is picked from the length of `expected`, and the
/// comparison ignores case.
///
/// # Returns
///
/// * `Ok(true)` if the digests match or no digest was provided
/// * `Ok(false)` if the file doesn't exist, the digest length matches no
///   algorithm, or the digests differ
/// * `Err` if the file cannot be read
pub fn verify_file(path: &Path, expected: Option<&str>) -> Result<bool> {
    let Some(expected) = expected else {
        return Ok(true);
    };

    if !path.exists() {
        return Ok(false);
    }

    let Some(algorithm) = HashAlgorithm::from_hex_length(expected.len()) else {
        return Ok(false);
    };

    let actual = hash_file(path, algorithm)?;
    Ok(actual.eq_ignore_ascii_case(expected))
}
