//! Streams a URL into a file.

use super::config::DownloaderConfig;
use crate::download::Download;
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::logging::DOWNLOADER;
use crate::progress::ProgressReporter;
use crate::utils::announced_length;

use futures::StreamExt;
use reqwest::header::HeaderMap;
use std::fmt;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::{fs, io::AsyncWriteExt, io::BufWriter};
use tracing::{debug, info, warn};

/// Fetches URLs to local files.
///
/// An existing file at the target is deleted before the transfer starts, so
/// a successful download always leaves exactly the served bytes on disk.
/// Failed transfers are not retried and leave whatever was written.
#[derive(Clone)]
pub struct Downloader {
    config: DownloaderConfig,
}

impl Debug for Downloader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new(DownloaderConfig::default())
    }
}

impl Downloader {
    pub(crate) fn new(config: DownloaderConfig) -> Self {
        Self { config }
    }

    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    pub fn progress_interval(&self) -> Duration {
        self.config.progress_interval
    }

    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Download `download.url` into `download.target`.
    ///
    /// Returns the target path when the file exists on disk afterwards.
    /// Non-success HTTP statuses are errors; nothing is written for them
    /// beyond removing a previous file.
    pub async fn download(&self, download: &Download) -> Result<Option<PathBuf>> {
        let target = download.target.as_path();
        prepare_target(target).await?;

        let client = create_http_client(HttpClientConfig {
            proxy: self.config.proxy.clone(),
            headers: self.config.headers.clone(),
            system_proxy: self.config.system_proxy,
        })?;

        info!(target: DOWNLOADER, "Connecting to {}", download.url);
        let res = client.get(download.url.as_str()).send().await?;
        let res = res.error_for_status()?;

        let total = announced_length(&res);
        match total {
            Some(size) => info!(target: DOWNLOADER, "Announced size: {} bytes", size),
            None => warn!(
                target: DOWNLOADER,
                "The server did not report a content length for {}", download.url
            ),
        }

        let mut reporter = ProgressReporter::new(
            target.display().to_string(),
            total,
            self.config.progress_interval,
        )
        .with_bar(&self.config.style_options)
        .with_callback(self.config.on_progress.clone());

        debug!(target: DOWNLOADER, "Creating destination file {:?}", target);
        let file = fs::File::create(target).await?;
        let mut writer = BufWriter::new(file);

        let chunk_size = self.config.chunk_size.max(1);
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let bytes = item?;
            for chunk in bytes.chunks(chunk_size) {
                writer.write_all(chunk).await?;
                reporter.advance(chunk.len() as u64);
            }
        }

        writer.flush().await?;
        writer.into_inner().sync_all().await?;

        let progress = reporter.finish();
        info!(
            target: DOWNLOADER,
            "Downloaded {} bytes to {}", progress.written, target.display()
        );

        if fs::try_exists(target).await? {
            Ok(Some(target.to_path_buf()))
        } else {
            Ok(None)
        }
    }

    /// Blocking version of [`Downloader::download`].
    ///
    /// Drives the transfer on a private current-thread runtime. Must not be
    /// called from within an async context.
    pub fn download_blocking(&self, download: &Download) -> Result<Option<PathBuf>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Internal(format!("cannot start the download runtime: {}", e)))?;
        runtime.block_on(self.download(download))
    }
}

/// Create the parent directories of `target` and remove any existing file.
async fn prepare_target(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        debug!(target: DOWNLOADER, "Creating destination directory {:?}", parent);
        fs::create_dir_all(parent).await?;
    }

    if fs::try_exists(target).await? {
        warn!(
            target: DOWNLOADER,
            "{} already exists and will be overwritten",
            target.display()
        );
        fs::remove_file(target).await?;
    }
    Ok(())
}
