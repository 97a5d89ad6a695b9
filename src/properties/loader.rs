//! The [`ConfigLoader`] handle.

use super::parser::parse_into;
use super::value::PropertyValue;
use crate::error::{Error, Result};
use crate::logging::{self, CONFIGURATION};

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tracing::{error, trace, warn};

/// Key/value configuration read from a properties source.
///
/// The source is read in full by [`initialize`](ConfigLoader::initialize).
/// Until that succeeds every accessor logs a warning and hands back the
/// caller's default.
pub struct ConfigLoader {
    source: Option<Mutex<Box<dyn Read + Send>>>,
    entries: HashMap<String, String>,
    initialized: bool,
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("source", &self.source.is_some())
            .field("entries", &self.entries.len())
            .field("initialized", &self.initialized)
            .finish()
    }
}

impl ConfigLoader {
    /// Creates a loader over any byte source.
    pub fn new<R: Read + Send + 'static>(source: R) -> Self {
        Self {
            source: Some(Mutex::new(Box::new(source))),
            entries: HashMap::new(),
            initialized: false,
        }
    }

    /// Creates a loader over an in-memory buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Cursor::new(bytes.into()))
    }

    /// Opens `path` as the byte source.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }

    /// Reads and parses the source.
    ///
    /// Returns `false` when the source cannot be read or holds a malformed
    /// line. The failure is logged and the loader stays uninitialized.
    pub fn initialize(&mut self) -> bool {
        match self.load() {
            Ok(()) => {
                self.initialized = true;
                true
            }
            Err(e) => {
                error!(
                    target: CONFIGURATION,
                    "{}",
                    logging::error_chain("Unable to initialize:", &e)
                );
                false
            }
        }
    }

    fn load(&mut self) -> Result<()> {
        let mut source = self
            .source
            .take()
            .ok_or_else(|| Error::Internal("the properties source was already consumed".into()))?
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if text.is_empty() {
            warn!(target: CONFIGURATION, "There was no data to load!");
            return Ok(());
        }
        parse_into(&text, &mut self.entries)
    }

    /// Whether [`initialize`](ConfigLoader::initialize) has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        if !self.initialized {
            warn!(
                target: CONFIGURATION,
                "Configuration was not initialized before access! Unable to get property {}", key
            );
            return None;
        }
        match self.entries.get(key) {
            Some(value) => {
                trace!(target: CONFIGURATION, "Found property key {} as {}", key, value);
                Some(value)
            }
            None => {
                warn!(
                    target: CONFIGURATION,
                    "The key {} was not found in the properties. Unable to get property.", key
                );
                None
            }
        }
    }

    /// Returns the stored text for `key`, or `default`.
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.lookup(key).unwrap_or(default)
    }

    /// Returns the value for `key` converted to `T`, or `default`.
    ///
    /// A stored value that does not convert is logged and replaced by
    /// `default`.
    pub fn get<T: PropertyValue>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.lookup(key) else {
            return default;
        };
        match T::from_property(raw) {
            Some(value) => value,
            None => {
                warn!(
                    target: CONFIGURATION,
                    "Unable to get value for key {}: {:?} is not formatted like {}.",
                    key,
                    raw,
                    T::KIND
                );
                default
            }
        }
    }

    /// Returns the value for `key` as an owned string, or `default`.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get_str(key, default).to_owned()
    }

    /// Returns the value for `key` as an `i64`, or `default`.
    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.get(key, default)
    }

    /// Returns the value for `key` as an `i32`, or `default`.
    pub fn get_i32(&self, key: &str, default: i32) -> i32 {
        self.get(key, default)
    }

    /// Returns the value for `key` as an `i16`, or `default`.
    pub fn get_i16(&self, key: &str, default: i16) -> i16 {
        self.get(key, default)
    }

    /// Returns the value for `key` as an `i8`, or `default`.
    pub fn get_i8(&self, key: &str, default: i8) -> i8 {
        self.get(key, default)
    }

    /// Returns the value for `key` as an `f64`, or `default`.
    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.get(key, default)
    }

    /// Returns the value for `key` as an `f32`, or `default`.
    pub fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.get(key, default)
    }

    /// Whether `key` was parsed. Does not log.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parsed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parsed keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// A copy of the parsed state without the byte source.
    pub(crate) fn snapshot(&self) -> Self {
        Self {
            source: None,
            entries: self.entries.clone(),
            initialized: self.initialized,
        }
    }
}
