//! Named loggers and the single-line record format.
//!
//! Every component logs through [`tracing`] under a fixed target, which plays
//! the part of a named logger. [`subscriber`] builds a subscriber that writes
//! those records to standard error as
//! `<timestamp> [<target>] <LEVEL>: <message>`.
//!
//! # Examples
//!
//! ```rust
//! use attribute_util::logging;
//! use tracing::Level;
//!
//! let subscriber = logging::subscriber(Level::INFO);
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(target: logging::DOWNLOADER, "Connecting to https://example.com");
//! });
//! ```

pub mod format;

pub use format::LogFormatter;

use crate::error::{Error, Result};

use std::fmt::Write;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

/// Target used by [`ConfigLoader`](crate::properties::ConfigLoader).
pub const CONFIGURATION: &str = "Configuration";
/// Target used by [`Locale`](crate::locale::Locale) and the locale registry.
pub const LOCALIZATION: &str = "Localization";
/// Target used by the [`hash`](crate::hash) functions.
pub const HASHING: &str = "Hashing Function";
/// Target used by [`ZipExtractor`](crate::archive::ZipExtractor).
pub const ZIP: &str = "Zip / Unzip";
/// Target used by [`Downloader`](crate::downloader::Downloader).
pub const DOWNLOADER: &str = "Downloader";

/// Creates a subscriber writing to standard error with [`LogFormatter`].
pub fn subscriber(max_level: Level) -> impl Subscriber + Send + Sync + 'static {
    subscriber_with_writer(max_level, std::io::stderr)
}

/// Creates a subscriber writing formatted records to `writer`.
pub fn subscriber_with_writer<W>(max_level: Level, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_ansi(false)
        .with_writer(writer)
        .event_format(LogFormatter)
        .finish()
}

/// Installs [`subscriber`] as the global default.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init(max_level: Level) -> Result<()> {
    tracing::subscriber::set_global_default(subscriber(max_level))
        .map_err(|e| Error::Internal(format!("logging already initialized: {e}")))
}

/// Renders `header`, the error and every underlying cause on separate lines.
pub fn error_chain(header: &str, err: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = format!("{header}\n{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(rendered, "\n  caused by: {cause}");
        source = cause.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_chain_lists_causes() {
        let err = Error::from(io::Error::new(io::ErrorKind::NotFound, "missing.properties"));
        let rendered = error_chain("Unable to initialize:", &err);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Unable to initialize:");
        assert_eq!(lines[1], "I/O error");
        assert_eq!(lines[2], "  caused by: missing.properties");
    }

    #[test]
    fn test_error_chain_without_source() {
        let err = Error::UnknownAlgorithm("WHIRLPOOL".into());
        let rendered = error_chain("Hashing failed:", &err);
        assert_eq!(rendered, "Hashing failed:\nUnsupported hash algorithm: WHIRLPOOL");
    }

    #[test]
    fn test_init_twice_fails() {
        let _ = init(Level::INFO);
        assert!(init(Level::INFO).is_err());
    }
}
