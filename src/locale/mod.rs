//! Localization on top of [`ConfigLoader`](crate::properties::ConfigLoader).
//!
//! A [`Locale`] pairs a properties source with a language tag. Initializing
//! it successfully publishes it in the process-wide [`LocaleRegistry`], where
//! [`Locale::get`] finds it again.
//!
//! # Examples
//!
//! ```rust
//! use attribute_util::locale::Locale;
//! use std::io::Cursor;
//!
//! let mut english = Locale::new(Cursor::new("cancel=Cancel\r\n"), "en-US");
//! assert!(english.initialize());
//!
//! let english = Locale::get("en-US").unwrap();
//! assert_eq!(english.translate("cancel"), "Cancel");
//! assert_eq!(english.translate("ok"), "ok");
//! ```

pub mod locale;
pub mod registry;

pub use locale::Locale;
pub use registry::LocaleRegistry;
