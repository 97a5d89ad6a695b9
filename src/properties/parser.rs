//! Line splitting, key/value separation and escape decoding.

use crate::error::{Error, Result};
use crate::logging::CONFIGURATION;

use std::collections::HashMap;
use tracing::debug;

/// Logical line separator. A bare LF is part of the line it appears in.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Escapable characters, paired with what they decode to.
const ESCAPES: [(char, char); 5] = [
    ('=', '='),
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
    ('f', '\u{000C}'),
];

/// Parses properties text into a new map.
///
/// # Example
///
/// ```rust
/// use attribute_util::properties::parse;
///
/// let entries = parse("name=value\r\n# comment\r\nkey\\=eq=v\\tx").unwrap();
/// assert_eq!(entries["name"], "value");
/// assert_eq!(entries["key=eq"], "v\tx");
/// ```
pub fn parse(text: &str) -> Result<HashMap<String, String>> {
    let mut entries = HashMap::new();
    parse_into(text, &mut entries)?;
    Ok(entries)
}

/// Parses properties text into `entries`.
///
/// Stops at the first malformed line; entries registered before it stay in
/// the map.
pub fn parse_into(text: &str, entries: &mut HashMap<String, String>) -> Result<()> {
    for (index, line) in text.split(LINE_SEPARATOR).enumerate() {
        if is_skipped(line) {
            continue;
        }

        let (key, value) = split_pair(line)
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| Error::MalformedLine {
                line: index + 1,
                content: line.to_owned(),
            })?;

        let key = unescape(key);
        let value = unescape(value);
        debug!(target: CONFIGURATION, "Registering key {} as {}", key, value);
        entries.insert(key, value);
    }
    Ok(())
}

/// Empty lines and lines starting with `;` or `#`.
fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with([';', '#'])
}

/// Splits on the only `=` not preceded by a backslash.
///
/// Returns `None` when the line has zero or several such separators.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let mut separators = bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'=' && (i == 0 || bytes[i - 1] != b'\\'))
        .map(|(i, _)| i);

    let at = separators.next()?;
    if separators.next().is_some() {
        return None;
    }
    Some((&line[..at], &line[at + 1..]))
}

/// Decodes `\=`, `\n`, `\r`, `\t` and `\f`. Any other backslash is kept.
pub fn unescape(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        let replacement = chars
            .peek()
            .and_then(|next| ESCAPES.iter().find(|(escaped, _)| escaped == next))
            .map(|&(_, replacement)| replacement);
        match replacement {
            Some(replacement) => {
                chars.next();
                decoded.push(replacement);
            }
            None => decoded.push(c),
        }
    }
    decoded
}

/// Encodes `=`, LF, CR, TAB and FF so that [`unescape`] restores `text`.
pub fn escape(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for c in text.chars() {
        match ESCAPES.iter().find(|(_, replacement)| *replacement == c) {
            Some(&(escaped, _)) => {
                encoded.push('\\');
                encoded.push(escaped);
            }
            None => encoded.push(c),
        }
    }
    encoded
}
