//! Process-wide registry of initialized locales.

use super::locale::Locale;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static GLOBAL: Lazy<LocaleRegistry> = Lazy::new(LocaleRegistry::default);

/// Language tag → locale map.
///
/// Only a successful [`Locale::initialize`] writes to the registry. Entries
/// are never removed; registering a tag again replaces the previous locale.
#[derive(Debug, Default)]
pub struct LocaleRegistry {
    locales: Mutex<HashMap<String, Arc<Locale>>>,
}

impl LocaleRegistry {
    /// The registry shared by the whole process.
    pub fn global() -> &'static LocaleRegistry {
        &GLOBAL
    }

    fn locked(&self) -> MutexGuard<'_, HashMap<String, Arc<Locale>>> {
        // Values are replaced whole, so a poisoned map is still consistent.
        self.locales.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn register(&self, locale: Locale) {
        let tag = locale.tag().to_owned();
        self.locked().insert(tag, Arc::new(locale));
    }

    /// Returns the locale registered under `tag`.
    pub fn get(&self, tag: &str) -> Option<Arc<Locale>> {
        self.locked().get(tag).cloned()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.locked().contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.locked().keys().cloned().collect();
        tags.sort();
        tags
    }
}
