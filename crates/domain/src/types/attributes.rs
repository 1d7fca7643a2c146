//! Attribute maps and the ordered merge
//!
//! Payloads are string-keyed JSON values. Collector output is always a JSON
//! string; incoming payloads may hold any value.

use std::collections::BTreeMap;

use serde_json::Value;

use super::keys::AttributeKey;

/// Key/value payload of a tracking event or snapshot.
pub type AttributeMap = BTreeMap<String, Value>;

/// Typed accessors for [`AttributeMap`].
pub trait AttributeMapExt {
    /// Insert a collector value under a fixed key, replacing any previous one.
    fn set_attribute(&mut self, key: AttributeKey, value: impl Into<String>);

    /// Read a string value by key.
    fn attribute(&self, key: AttributeKey) -> Option<&str>;
}

impl AttributeMapExt for AttributeMap {
    fn set_attribute(&mut self, key: AttributeKey, value: impl Into<String>) {
        self.insert(key.as_str().to_string(), Value::String(value.into()));
    }

    fn attribute(&self, key: AttributeKey) -> Option<&str> {
        self.get(key.as_str()).and_then(Value::as_str)
    }
}

/// Merge sources in order; a later source overwrites earlier keys.
///
/// ```rust
/// use devicedata_domain::{merge_attributes, AttributeMap};
/// use serde_json::json;
///
/// let mut incoming = AttributeMap::new();
/// incoming.insert("a".into(), json!(1));
/// let mut first = AttributeMap::new();
/// first.insert("device_model".into(), json!("X"));
/// let mut second = AttributeMap::new();
/// second.insert("device_model".into(), json!("Y"));
///
/// let merged = merge_attributes([&incoming, &first, &second]);
/// assert_eq!(merged["device_model"], json!("Y"));
/// assert_eq!(merged["a"], json!(1));
/// ```
pub fn merge_attributes<'a, I>(sources: I) -> AttributeMap
where
    I: IntoIterator<Item = &'a AttributeMap>,
{
    sources.into_iter().fold(AttributeMap::new(), |mut merged, source| {
        merged.extend(source.iter().map(|(key, value)| (key.clone(), value.clone())));
        merged
    })
}
