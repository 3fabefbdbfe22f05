//! Save element: the persisted representation of a block instance.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Root element a block instance saves: tag, plain attributes, and an
/// inline style map.
///
/// The style map is recomputed from scratch on every save pass, never
/// patched incrementally, so stale declarations cannot survive an
/// attribute change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveElement {
    pub tag: String,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    #[serde(default)]
    pub styles: HashMap<String, String>,
}

impl SaveElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: HashMap::new(),
            styles: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.styles.insert(property.into(), value.into());
    }

    /// Render the style map as a `property: value` list with sorted keys.
    ///
    /// Returns `None` when there is nothing to emit, so callers can omit
    /// the `style` attribute entirely.
    pub fn style_attribute(&self) -> Option<String> {
        if self.styles.is_empty() {
            return None;
        }
        let mut props: Vec<_> = self.styles.iter().collect();
        props.sort_by(|a, b| a.0.cmp(b.0));
        Some(
            props
                .into_iter()
                .map(|(property, value)| format!("{}: {}", property, value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Serialize to a self-closing HTML tag with sorted attributes.
    ///
    /// The `style` attribute is rendered last from the style map; a `style`
    /// key in `attributes` is ignored in favor of it.
    pub fn render_html(&self) -> String {
        let mut out = format!("<{}", self.tag);
        let mut attrs: Vec<_> = self
            .attributes
            .iter()
            .filter(|(key, _)| key.as_str() != "style")
            .collect();
        attrs.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in attrs {
            let _ = write!(out, " {}=\"{}\"", key, escape_attribute(value));
        }
        if let Some(style) = self.style_attribute() {
            let _ = write!(out, " style=\"{}\"", escape_attribute(&style));
        }
        out.push_str("/>");
        out
    }
}

fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}
