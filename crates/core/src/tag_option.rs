//! Tag-option parsing
//!
//! Field tags carry settings in a small `KEY:value;FLAG` language, e.g.
//! `"SIZE:10; REQUIRED"`. Parsing rules:
//!
//! - Segments are separated by `;`
//! - Each segment splits on its first `:` into key and value
//! - Keys are trimmed and uppercased; values are kept exactly as written
//! - A segment without `:` maps its key to itself, so the result doubles as
//!   a flag set
//! - Later duplicates overwrite earlier ones
//! - Empty segments (`"A;;B"`, trailing `;`) produce the key `""` mapped to
//!   itself
//!
//! There is no escaping: `;` and `:` cannot appear inside keys, and `;`
//! cannot appear inside values.

use std::collections::hash_map;
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

/// Segment separator
pub const SEGMENT_SEPARATOR: char = ';';

/// Key/value separator within a segment
pub const VALUE_SEPARATOR: char = ':';

/// Parsed tag options: uppercase key to raw value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions(HashMap<String, String>);

impl TagOptions {
    /// Value stored under `key` (keys are stored uppercase)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether `key` was present, as a flag or with a value
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no keys were parsed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Unwrap into the underlying map
    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl From<TagOptions> for HashMap<String, String> {
    fn from(options: TagOptions) -> Self {
        options.0
    }
}

impl IntoIterator for TagOptions {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromStr for TagOptions {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_tag_options(s))
    }
}

/// Parse a tag-option string into a fresh [`TagOptions`] map
///
/// Never fails; see the module docs for how malformed input degrades.
pub fn parse_tag_options(spec: &str) -> TagOptions {
    let mut options = HashMap::new();
    for segment in spec.split(SEGMENT_SEPARATOR) {
        let (key, value) = match segment.split_once(VALUE_SEPARATOR) {
            Some((key, value)) => (key, Some(value)),
            None => (segment, None),
        };
        let key = key.trim().to_uppercase();
        let value = match value {
            Some(value) => value.to_string(),
            None => key.clone(),
        };
        options.insert(key, value);
    }
    TagOptions(options)
}
