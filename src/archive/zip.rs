//! ZIP extraction into a target directory.

use super::sanitize::resolve_entry_path;
use crate::error::{Error, Result};
use crate::logging::ZIP;

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Seek, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, trace};
use zip::ZipArchive;

/// Default number of bytes copied per write.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// What an extraction produced, in archive order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Files written.
    pub files: Vec<PathBuf>,
    /// Directories created for directory entries.
    pub directories: Vec<PathBuf>,
    /// Total decompressed bytes written.
    pub bytes_written: u64,
}

/// Extracts ZIP archives beneath a target directory.
///
/// ```rust,no_run
/// use attribute_util::archive::ZipExtractor;
/// use std::path::Path;
///
/// # fn main() -> attribute_util::Result<()> {
/// let report = ZipExtractor::new("unpacked").extract_file(Path::new("bundle.zip"))?;
/// println!("{} files written", report.files.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ZipExtractor {
    target: PathBuf,
    chunk_size: usize,
}

impl ZipExtractor {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set the number of bytes copied per write. Zero is treated as one.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Extract the archive stored at `archive`.
    ///
    /// The target is checked before the archive is opened. Entries written
    /// before a failure stay on disk.
    pub fn extract_file(&self, archive: &Path) -> Result<ExtractReport> {
        info!(
            target: ZIP,
            "Unzipping file {} to directory {}",
            archive.display(),
            self.target.display()
        );
        self.prepare_target()?;
        let file = File::open(archive)?;
        self.extract_entries(BufReader::new(file))
    }

    /// Extract an archive read from `reader`.
    pub fn extract_reader<R: Read + Seek>(&self, reader: R) -> Result<ExtractReport> {
        info!(target: ZIP, "Unzipping stream to directory {}", self.target.display());
        self.prepare_target()?;
        self.extract_entries(reader)
    }

    fn prepare_target(&self) -> Result<()> {
        if self.target.exists() && !self.target.is_dir() {
            error!(
                target: ZIP,
                "Unable to unzip! {} exists, and it is not a directory!",
                self.target.display()
            );
            return Err(Error::NotADirectory(self.target.clone()));
        }
        fs::create_dir_all(&self.target)?;
        Ok(())
    }

    fn extract_entries<R: Read + Seek>(&self, reader: R) -> Result<ExtractReport> {
        let mut archive = ZipArchive::new(reader)?;
        let mut report = ExtractReport::default();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_owned();
            trace!(target: ZIP, "Found zip entry {}", name);

            let output = resolve_entry_path(&self.target, &name)?;
            trace!(target: ZIP, "Full output path enumerated to {}", output.display());

            if entry.is_dir() {
                fs::create_dir_all(&output)?;
                trace!(target: ZIP, "Entry {} is a directory. Moving to next.", name);
                report.directories.push(output);
                continue;
            }

            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }

            trace!(target: ZIP, "Writing {} to {}", name, output.display());
            let mut writer = BufWriter::new(File::create(&output)?);
            report.bytes_written += copy_chunked(&mut entry, &mut writer, self.chunk_size)?;
            writer.flush()?;
            report.files.push(output);
        }

        Ok(report)
    }
}

/// Copy `reader` into `writer` in `chunk_size` pieces until end of stream.
fn copy_chunked<R: Read, W: Write>(reader: &mut R, writer: &mut W, chunk_size: usize) -> io::Result<u64> {
    let mut buffer = vec![0u8; chunk_size];
    let mut copied = 0u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buffer[..read])?;
        copied += read as u64;
    }

    Ok(copied)
}
