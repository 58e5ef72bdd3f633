//! URL query patching
//!
//! Admin templates build filter, sort and pagination links by patching the
//! current request URL: `patch_url(current, &[("page", 2)])`.

use std::collections::BTreeMap;
use std::fmt;

use adminkit_core::Result;
use url::{form_urlencoded, ParseError, Url};

/// Update the query string of `original`
///
/// Each `(key, value)` pair is formatted with `Display`. An empty value
/// removes the key; any other value replaces every existing value for the
/// key. The query is re-encoded with keys in sorted order, and dropped
/// entirely when nothing is left.
///
/// Relative references (`/admin/orders`, `../orders`, `//cdn.test/x`) are
/// patched as text: only the query changes, the path and fragment are kept
/// byte for byte.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`](adminkit_core::Error::InvalidUrl) if
/// `original` is an absolute URL that cannot be parsed.
pub fn patch_url<K, V>(original: &str, params: &[(K, V)]) -> Result<String>
where
    K: fmt::Display,
    V: fmt::Display,
{
    match Url::parse(original) {
        Ok(mut url) => {
            let query = patch_query(url.query(), params);
            url.set_query(query.as_deref());
            Ok(url.into())
        }
        Err(ParseError::RelativeUrlWithoutBase) => Ok(patch_relative(original, params)),
        Err(e) => Err(e.into()),
    }
}

fn patch_relative<K, V>(original: &str, params: &[(K, V)]) -> String
where
    K: fmt::Display,
    V: fmt::Display,
{
    let (head, fragment) = match original.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (original, None),
    };
    let (path, query) = match head.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (head, None),
    };

    let mut patched = path.to_string();
    if let Some(query) = patch_query(query, params) {
        patched.push('?');
        patched.push_str(&query);
    }
    if let Some(fragment) = fragment {
        patched.push('#');
        patched.push_str(fragment);
    }
    patched
}

/// Re-encoded query, or `None` when no pairs are left
fn patch_query<K, V>(query: Option<&str>, params: &[(K, V)]) -> Option<String>
where
    K: fmt::Display,
    V: fmt::Display,
{
    let mut pairs: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
        pairs
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    for (key, value) in params {
        let key = key.to_string();
        let value = value.to_string();
        if value.is_empty() {
            pairs.remove(&key);
        } else {
            pairs.insert(key, vec![value]);
        }
    }

    if pairs.is_empty() {
        return None;
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in &pairs {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    Some(serializer.finish())
}
