//! Shared utility functions.

pub mod content_length;

pub use content_length::{announced_length, header_length};
