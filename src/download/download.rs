//! A single URL-to-file transfer request.
//!
//! # Examples
//!
//! ```rust
//! use attribute_util::download::Download;
//! use std::convert::TryFrom;
//! use std::path::Path;
//!
//! // The file name comes from the last path segment.
//! let download = Download::try_from(("https://example.com/files/out%20put.bin", Path::new("/t")))?;
//! assert_eq!(download.target, Path::new("/t/out put.bin"));
//!
//! // Or give the target explicitly.
//! let url = reqwest::Url::parse("https://example.com/download?id=7")?;
//! let download = Download::new(&url, "/t/out.bin");
//! assert_eq!(download.file_name(), Some("out.bin"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

/// Represents a file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// URL of the file to download.
    pub url: Url,
    /// Path of the file on disk. Any existing file there is replaced.
    pub target: PathBuf,
}

impl Download {
    /// Creates a new [`Download`].
    ///
    /// When using the [`Download::try_from`] method, the file name is
    /// taken from the URL and joined to a directory instead.
    pub fn new(url: &Url, target: impl AsRef<Path>) -> Self {
        Self {
            url: url.clone(),
            target: target.as_ref().to_path_buf(),
        }
    }

    /// File name component of the target.
    pub fn file_name(&self) -> Option<&str> {
        self.target.file_name().and_then(|name| name.to_str())
    }
}

/// Decode the last path segment of `url` into a file name.
fn file_name_from(url: &Url) -> Result<String, Error> {
    let segment = url
        .path_segments()
        .ok_or_else(|| {
            Error::InvalidUrl(format!("The url \"{}\" does not contain a valid path", url))
        })?
        .next_back()
        .unwrap_or_default();

    let filename: String = form_urlencoded::parse(segment.as_bytes())
        .map(|(key, val)| [key, val].concat())
        .collect();

    if filename.is_empty() || filename == "." || filename == ".." {
        return Err(Error::InvalidUrl(format!(
            "The url \"{}\" does not contain a filename",
            url
        )));
    }
    // Decoded separators would place the target outside the directory.
    if filename.contains(['/', '\\']) || Path::new(&filename).is_absolute() {
        return Err(Error::InvalidUrl(format!(
            "The url \"{}\" names a path, not a file: {}",
            url, filename
        )));
    }
    Ok(filename)
}

impl TryFrom<(&Url, &Path)> for Download {
    type Error = crate::error::Error;

    fn try_from((url, directory): (&Url, &Path)) -> Result<Self, Self::Error> {
        let filename = file_name_from(url)?;
        Ok(Download::new(url, directory.join(filename)))
    }
}

impl TryFrom<(&str, &Path)> for Download {
    type Error = crate::error::Error;

    fn try_from((url, directory): (&str, &Path)) -> Result<Self, Self::Error> {
        Url::parse(url)
            .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", url, e)))
            .and_then(|u| Download::try_from((&u, directory)))
    }
}
