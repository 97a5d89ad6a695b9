//! Configuration structures and defaults for the downloader.

use crate::progress::{ProgressBarOpts, ProgressCallback};

use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::time::Duration;

/// Bytes written to the target file per write.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;
/// Minimum wall-clock gap between two progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(5);

/// Configuration structure for the downloader
#[derive(Clone)]
pub struct DownloaderConfig {
    /// Bytes per write to the target file.
    pub chunk_size: usize,
    /// Minimum wall-clock gap between progress log lines.
    pub progress_interval: Duration,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Explicit proxy.
    pub proxy: Option<reqwest::Proxy>,
    /// Honor the proxy environment variables.
    pub system_proxy: bool,
    /// Progress bar style, hidden unless set.
    pub style_options: ProgressBarOpts,
    /// Callback receiving each progress report.
    pub on_progress: Option<Arc<ProgressCallback>>,
}

impl std::fmt::Debug for DownloaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloaderConfig")
            .field("chunk_size", &self.chunk_size)
            .field("progress_interval", &self.progress_interval)
            .field("headers", &self.headers)
            .field("proxy", &self.proxy)
            .field("system_proxy", &self.system_proxy)
            .field("style_options", &self.style_options)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            headers: None,
            proxy: None,
            system_proxy: true,
            style_options: ProgressBarOpts::hidden(),
            on_progress: None,
        }
    }
}
