//! Error handling for the attribute utilities.
//!
//! Every fallible operation in the crate returns [`Result`]. Configuration
//! parse failures are absorbed by [`ConfigLoader::initialize`] after being
//! logged; everything raised by hashing, extraction and downloading is
//! surfaced to the caller through this enum.
//!
//! [`ConfigLoader::initialize`]: crate::properties::ConfigLoader::initialize

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using the attribute utilities.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Captures failures that don't fit into other categories, such as the
    /// private runtime used by blocking downloads failing to start.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    ///
    /// Wraps standard I/O errors raised while reading sources, writing
    /// extracted entries or writing downloaded bytes.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Network failures and non-success HTTP status codes.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the middleware stack wrapping the HTTP client.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// The archive could not be read.
    #[error("Invalid archive")]
    Zip {
        #[from]
        source: zip::result::ZipError,
    },

    /// The extraction target exists and is not a directory.
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    /// An archive entry would be written outside of the extraction target.
    #[error("zip-slip detected: entry '{entry}' resolves to '{resolved}'")]
    ZipSlip { entry: String, resolved: PathBuf },

    /// A properties line does not split into a non-empty key and a value.
    #[error("Cannot parse line {line}: the structure of the key is invalid [{content}]")]
    MalformedLine { line: usize, content: String },

    /// A digest name outside of the supported set.
    #[error("Unsupported hash algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type alias for operations that can fail with an [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
