//! Properties-style configuration loading.
//!
//! A properties source is UTF-8 text made of CR/LF separated lines. Lines
//! starting with `;` or `#` are comments, empty lines are ignored, and every
//! other line holds a single `key=value` pair. `\=`, `\n`, `\r`, `\t` and
//! `\f` are decoded on both sides of the pair.
//!
//! # Examples
//!
//! ```rust
//! use attribute_util::properties::ConfigLoader;
//!
//! let mut config = ConfigLoader::from_bytes("retries=5\r\nname=demo");
//! assert!(config.initialize());
//!
//! assert_eq!(config.get_i32("retries", 3), 5);
//! assert_eq!(config.get_str("name", "unnamed"), "demo");
//! assert_eq!(config.get_f64("ratio", 0.5), 0.5);
//! ```

pub mod loader;
pub mod parser;
pub mod value;

pub use loader::ConfigLoader;
pub use parser::{escape, parse, parse_into, unescape, LINE_SEPARATOR};
pub use value::PropertyValue;
