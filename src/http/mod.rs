//! HTTP client construction shared by the downloader.

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
