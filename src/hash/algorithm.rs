//! The supported digest algorithms.

use crate::error::Error;

use digest::DynDigest;
use std::fmt;
use std::str::FromStr;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD5, 16-byte digest.
    Md5,
    /// SHA-1, 20-byte digest.
    Sha1,
    /// SHA-256, 32-byte digest.
    Sha256,
}

impl HashAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [HashAlgorithm; 3] = [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256];

    /// Name exposed to callers: `MD5`, `SHA1` or `SHA256`.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA1",
            HashAlgorithm::Sha256 => "SHA256",
        }
    }

    /// Standard algorithm name: `MD5`, `SHA-1` or `SHA-256`.
    pub fn canonical_name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha256 => "SHA-256",
        }
    }

    /// Digest length in bytes.
    pub fn digest_size(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
        }
    }

    /// Detect the algorithm from the length of a hex encoded digest.
    ///
    /// ```rust
    /// use attribute_util::hash::HashAlgorithm;
    ///
    /// assert_eq!(HashAlgorithm::from_hex_length(32), Some(HashAlgorithm::Md5));
    /// assert_eq!(HashAlgorithm::from_hex_length(40), Some(HashAlgorithm::Sha1));
    /// assert_eq!(HashAlgorithm::from_hex_length(64), Some(HashAlgorithm::Sha256));
    /// assert_eq!(HashAlgorithm::from_hex_length(50), None);
    /// ```
    pub fn from_hex_length(len: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.digest_size() * 2 == len)
    }

    pub(crate) fn hasher(self) -> Box<dyn DynDigest> {
        match self {
            HashAlgorithm::Md5 => Box::new(md5::Md5::default()),
            HashAlgorithm::Sha1 => Box::new(sha1::Sha1::default()),
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Accepts both the caller name (`SHA1`) and the standard name (`SHA-1`),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| s.eq_ignore_ascii_case(a.name()) || s.eq_ignore_ascii_case(a.canonical_name()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}
