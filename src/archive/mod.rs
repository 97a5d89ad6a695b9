//! Archive extraction.
//!
//! [`ZipExtractor`] materializes every entry of a ZIP archive beneath a
//! target directory, in archive order. Entries are never allowed to land
//! outside of that directory.

pub mod sanitize;
pub mod zip;

pub use sanitize::resolve_entry_path;
pub use self::zip::{ExtractReport, ZipExtractor};
