// File: rusty-forms/src/options.rs
// Purpose: Ordered key/label pairs for choice inputs and extension attributes

use serde::{Deserialize, Serialize};

/// An ordered key/value pair: an option (`key` = submitted value, `value` =
/// label) or an extra HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for KeyValue {
    fn from((key, value): (K, V)) -> Self {
        KeyValue::new(key, value)
    }
}

/// Parses `"admin:Admin,user:User"` into ordered pairs.
///
/// Entries without a `:` use the key as label. Blank entries are skipped and
/// surrounding whitespace is trimmed.
///
/// ```
/// use rusty_forms::options::parse_options;
///
/// let opts = parse_options("m:Male, f:Female");
/// assert_eq!(opts[1].key, "f");
/// assert_eq!(opts[1].value, "Female");
/// ```
pub fn parse_options(raw: &str) -> Vec<KeyValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((key, label)) => KeyValue::new(key.trim(), label.trim()),
            None => KeyValue::new(entry, entry),
        })
        .collect()
}
