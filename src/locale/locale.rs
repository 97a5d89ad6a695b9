//! The [`Locale`] handle.

use super::registry::LocaleRegistry;
use crate::error::Result;
use crate::logging::LOCALIZATION;
use crate::properties::ConfigLoader;

use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Translations for one language tag.
///
/// The tag is treated opaquely; BCP-47 (`en-US`) is the expected form.
#[derive(Debug)]
pub struct Locale {
    tag: String,
    loader: ConfigLoader,
}

impl Locale {
    /// Creates a locale reading its translations from `source`.
    pub fn new<R: Read + Send + 'static>(source: R, tag: impl Into<String>) -> Self {
        Self::with_loader(ConfigLoader::new(source), tag)
    }

    /// Opens `path` as the translation source.
    pub fn open(path: impl AsRef<Path>, tag: impl Into<String>) -> Result<Self> {
        Ok(Self::with_loader(ConfigLoader::open(path)?, tag))
    }

    fn with_loader(loader: ConfigLoader, tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            loader,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Parses the translations and, on success, registers a snapshot of
    /// this locale under its tag.
    pub fn initialize(&mut self) -> bool {
        if !self.loader.initialize() {
            return false;
        }
        debug!(target: LOCALIZATION, "Registering language {}", self.tag);
        LocaleRegistry::global().register(Self {
            tag: self.tag.clone(),
            loader: self.loader.snapshot(),
        });
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.loader.is_initialized()
    }

    /// Returns the translation of `key`, or `key` itself when there is none.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        let localized = self.loader.get_str(key, key);
        trace!(target: LOCALIZATION, "Localizing key {} as {}", key, localized);
        localized
    }

    /// The underlying key/value configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.loader
    }

    /// Looks up an initialized locale by language tag.
    pub fn get(tag: &str) -> Option<Arc<Locale>> {
        let locale = LocaleRegistry::global().get(tag);
        if locale.is_none() {
            warn!(
                target: LOCALIZATION,
                "Language {} could not be found. Perhaps it was not initialized?", tag
            );
        }
        locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn locale(text: &'static str, tag: &str) -> Locale {
        Locale::new(Cursor::new(text), tag)
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let mut locale = locale("cancel=Cancel\r\n", "unit-fallback");
        assert!(locale.initialize());
        assert_eq!(locale.translate("cancel"), "Cancel");
        assert_eq!(locale.translate("ok"), "ok");
    }

    #[test]
    fn test_uninitialized_translate_returns_key() {
        let locale = locale("cancel=Cancel\r\n", "unit-uninitialized");
        assert_eq!(locale.translate("cancel"), "cancel");
    }

    #[test]
    fn test_failed_initialize_does_not_register() {
        let mut locale = locale("broken", "unit-broken");
        assert!(!locale.initialize());
        assert!(!LocaleRegistry::global().contains("unit-broken"));
        assert!(Locale::get("unit-broken").is_none());
    }

    #[test]
    fn test_registered_snapshot() {
        let mut locale = locale("yes=Ja\r\nno=Nein", "unit-de-DE");
        assert!(locale.initialize());

        let registered = Locale::get("unit-de-DE").unwrap();
        assert_eq!(registered.tag(), "unit-de-DE");
        assert!(registered.is_initialized());
        assert_eq!(registered.translate("yes"), "Ja");
        assert_eq!(registered.config().len(), 2);
    }

    #[test]
    fn test_reinitialize_same_tag_replaces() {
        let mut first = locale("greeting=Hello", "unit-replace");
        assert!(first.initialize());
        let mut second = locale("greeting=Howdy", "unit-replace");
        assert!(second.initialize());

        let registered = Locale::get("unit-replace").unwrap();
        assert_eq!(registered.translate("greeting"), "Howdy");
    }
}
