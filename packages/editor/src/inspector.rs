//! UI-agnostic inspector panel model.
//!
//! Extensions describe the settings UI they want; the host decides how to
//! render it. Controls are bound to attribute keys, so a host applies a
//! user's choice as an [`AttributeChange`](crate::AttributeChange) and
//! re-renders.

use serde::{Deserialize, Serialize};

/// A titled group of controls in the block settings sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorPanel {
    pub title: String,
    pub initial_open: bool,
    pub controls: Vec<InspectorControl>,
}

/// A single settings control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InspectorControl {
    Select(SelectControl),
}

/// Single-choice dropdown bound to one block attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectControl {
    pub label: String,
    /// Attribute key the control reads and writes.
    pub attribute: String,
    /// Currently selected value (the attribute's stored tag).
    pub value: String,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}
