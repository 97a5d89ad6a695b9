//! Small utilities grouped under one attribute API: a properties loader
//! with typed accessors, localization maps keyed by language tag, digests
//! rendered as lowercase hex, ZIP extraction and URL downloads.
//!
//! # Quick Start
//!
//! ```rust
//! use attribute_util::{hash_str, ConfigLoader, HashAlgorithm};
//!
//! let mut config = ConfigLoader::from_bytes("# settings\r\nport=8080\r\nname=demo");
//! assert!(config.initialize());
//! assert_eq!(config.get_i32("port", 0), 8080);
//! assert_eq!(config.get_string("missing", "fallback"), "fallback");
//!
//! assert_eq!(
//!     hash_str("abc", HashAlgorithm::Md5),
//!     "900150983cd24fb0d6963f7d28e17f72"
//! );
//! ```
//!
//! ```rust,no_run
//! use attribute_util::{Download, DownloaderBuilder, Error, ZipExtractor};
//! use std::path::Path;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let download = Download::try_from(("https://example.com/bundle.zip", Path::new("/t")))?;
//! let downloader = DownloaderBuilder::new().build();
//! if let Some(archive) = downloader.download(&download).await? {
//!     ZipExtractor::new("/t/bundle").extract_file(&archive)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`properties`] - `key=value` configuration sources and typed lookups
//! - [`locale`] - localization maps and the process-wide registry
//! - [`hash`] - MD5, SHA-1 and SHA-256 digests
//! - [`archive`] - ZIP extraction beneath a target directory
//! - [`download`] and [`downloader`] - fetching a URL into a file
//! - [`logging`] - log targets, record formatting and subscriber setup
//! - [`error`] - the `Error` enum shared by every module

pub mod archive;
pub mod download;
pub mod downloader;
pub mod error;
pub mod hash;
pub mod http;
pub mod locale;
pub mod logging;
pub mod progress;
pub mod properties;
pub mod utils;

pub use archive::{ExtractReport, ZipExtractor};
pub use download::Download;
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use hash::{hash_file, hash_named, hash_reader, hash_str, HashAlgorithm};
pub use locale::{Locale, LocaleRegistry};
pub use progress::{Progress, ProgressBarOpts};
pub use properties::ConfigLoader;
