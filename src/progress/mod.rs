//! Progress reporting for downloads.
//!
//! - `style` - optional progress bar styling
//! - `reporter` - byte counting with periodic progress log lines
//!
//! # Examples
//!
//! ```rust
//! use attribute_util::progress::{ProgressBarOpts, ProgressReporter};
//! use std::time::Duration;
//!
//! let mut reporter = ProgressReporter::new("out.bin", Some(2048), Duration::from_secs(5))
//!     .with_bar(&ProgressBarOpts::hidden());
//! reporter.advance(1024);
//! reporter.advance(1024);
//! assert_eq!(reporter.finish().written, 2048);
//! ```

pub(crate) mod reporter;
pub(crate) mod style;

pub use reporter::{Progress, ProgressCallback, ProgressReporter};
pub use style::ProgressBarOpts;
