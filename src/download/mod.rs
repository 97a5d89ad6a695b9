//! Download requests.
//!
//! A [`Download`] pairs a URL with the path it is written to. The
//! [`Downloader`](crate::downloader::Downloader) performs the transfer.

pub mod download;

pub use download::Download;
