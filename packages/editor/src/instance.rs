//! Block instances and attribute changes.

use blockkit_blocks::BlockAttributes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One block in a document: its type name plus current attribute values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInstance {
    pub block: String,
    pub attributes: BlockAttributes,
}

/// Semantic attribute operations.
///
/// ## Semantics
///
/// ### Set
/// - Atomic replacement of the attribute's value (no merge attempts)
/// - Last write wins
///
/// ### Unset
/// - Removes the key; readers fall back to the schema default
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AttributeChange {
    Set { key: String, value: Value },
    Unset { key: String },
}

impl BlockInstance {
    pub fn new(block: impl Into<String>, attributes: BlockAttributes) -> Self {
        Self {
            block: block.into(),
            attributes,
        }
    }

    /// Apply a change to this instance's attributes.
    pub fn apply(&mut self, change: AttributeChange) {
        match change {
            AttributeChange::Set { key, value } => self.attributes.set(key, value),
            AttributeChange::Unset { key } => {
                self.attributes.remove(&key);
            }
        }
    }
}
