//! Attribute values of a block instance.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Attribute key holding the editor-facing class string.
pub const CLASS_ATTRIBUTE: &str = "className";

/// Current attribute values of one block instance.
///
/// The host persists these as JSON, so values are dynamically typed.
/// Readers degrade gracefully: a missing key or a value of the wrong type
/// reads as absent rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockAttributes {
    values: HashMap<String, Value>,
}

impl BlockAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String view of an attribute; non-string values read as absent.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_str_ignores_non_string_values() {
        let attrs = BlockAttributes::new()
            .with("spacing", "medium")
            .with("width", 320);

        assert_eq!(attrs.get_str("spacing"), Some("medium"));
        assert_eq!(attrs.get_str("width"), None);
        assert_eq!(attrs.get_str("missing"), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut attrs = BlockAttributes::new().with("spacing", "small");
        attrs.set("spacing", "large");

        assert_eq!(attrs.get_str("spacing"), Some("large"));
        assert_eq!(attrs.len(), 1);
    }
}
