//! Builder pattern implementation for creating [`Downloader`] instances.
//!
//! # Examples
//!
//! ```rust
//! use attribute_util::downloader::DownloaderBuilder;
//! use attribute_util::progress::ProgressBarOpts;
//! use std::time::Duration;
//!
//! let downloader = DownloaderBuilder::new()
//!     .progress_interval(Duration::from_secs(1))
//!     .style_options(ProgressBarOpts::with_pip_style())
//!     .on_progress(|progress| {
//!         println!("{} bytes", progress.written);
//!     })
//!     .build();
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::progress::{Progress, ProgressBarOpts};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::sync::Arc;
use std::time::Duration;

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// use attribute_util::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().chunk_size(4096).build();
/// assert_eq!(d.chunk_size(), 4096);
/// ```
#[derive(Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Set the number of bytes written per write. Zero is treated as one.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.config.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the minimum gap between two progress reports.
    pub fn progress_interval(mut self, interval: Duration) -> Self {
        self.config.progress_interval = interval;
        self
    }

    /// Set the progress bar style options.
    pub fn style_options(mut self, style_options: ProgressBarOpts) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Route requests through `proxy`.
    pub fn proxy(mut self, proxy: reqwest::Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set to `false` to ignore the proxy environment variables.
    pub fn system_proxy(mut self, enabled: bool) -> Self {
        self.config.system_proxy = enabled;
        self
    }

    /// Set a callback receiving each progress report.
    ///
    /// The callback runs on the task driving the download, right after the
    /// matching progress log line.
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Progress) + Send + Sync + 'static,
    {
        self.config.on_progress = Some(Arc::new(Box::new(callback)));
        self
    }

    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// Calling `.headers()` multiple times merges every `HeaderMap` into a
    /// single one. See also [`header()`].
    ///
    /// [`header()`]: DownloaderBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add a single http header.
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use attribute_util::downloader::DownloaderBuilder;
    ///
    /// let downloader = DownloaderBuilder::new()
    ///     .header(header::USER_AGENT, HeaderValue::from_static("attribute-util"))
    ///     .build();
    /// assert!(downloader.headers().is_some());
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options.
    pub fn build(self) -> Downloader {
        Downloader::new(self.config)
    }
}
