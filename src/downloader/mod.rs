//! URL to file transfers.
//!
//! - `builder` - [`DownloaderBuilder`] for configuring a [`Downloader`]
//! - `config` - [`DownloaderConfig`] and its defaults
//! - `downloader` - the transfer itself
//!
//! # Examples
//!
//! ```rust,no_run
//! use attribute_util::download::Download;
//! use attribute_util::downloader::DownloaderBuilder;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let download = Download::try_from(("https://example.com/out.bin", Path::new("/t")))?;
//! let downloader = DownloaderBuilder::new().build();
//! let file = downloader.download(&download).await?;
//! assert_eq!(file.as_deref(), Some(Path::new("/t/out.bin")));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::{DownloaderConfig, DEFAULT_CHUNK_SIZE, DEFAULT_PROGRESS_INTERVAL};
pub use downloader::Downloader;
