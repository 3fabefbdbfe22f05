//! Block type settings and attribute schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Value types an attribute definition can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    String,
    Number,
    Boolean,
}

/// One named attribute declaration: its type and default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    #[serde(rename = "type")]
    pub ty: AttributeType,
    pub default: Value,
}

impl AttributeDef {
    /// String-typed attribute with the given default.
    pub fn string(default: impl Into<String>) -> Self {
        Self {
            ty: AttributeType::String,
            default: Value::String(default.into()),
        }
    }
}

/// Settings a block type is registered with.
///
/// `element` is the tag of the root element the block saves (`img` for an
/// image block); extensions contribute to `attributes` at registration time
/// without ever dropping definitions the block already declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSettings {
    pub name: String,
    pub title: String,
    pub element: String,
    #[serde(default)]
    pub attributes: HashMap<String, AttributeDef>,
}

impl BlockSettings {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        element: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            element: element.into(),
            attributes: HashMap::new(),
        }
    }

    /// Add or replace one attribute definition, preserving all others.
    pub fn with_attribute(mut self, key: impl Into<String>, def: AttributeDef) -> Self {
        self.attributes.insert(key.into(), def);
        self
    }
}
