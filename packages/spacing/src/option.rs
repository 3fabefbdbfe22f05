//! The spacing option and its fixed margin table.

use serde::{Deserialize, Serialize};

/// User-selectable spacing sizes.
///
/// Stored on the block as a string tag. `None` is the empty string so an
/// unset attribute and an explicit "no spacing" choice read the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingOption {
    #[default]
    #[serde(rename = "")]
    None,
    Small,
    Medium,
    Large,
}

impl SpacingOption {
    /// All options, in the order the select control lists them.
    pub const ALL: [SpacingOption; 4] = [
        SpacingOption::None,
        SpacingOption::Small,
        SpacingOption::Medium,
        SpacingOption::Large,
    ];

    /// Parse a stored attribute tag. Anything outside the enum reads as no
    /// selection, so malformed persisted data degrades to no contribution.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "" => Some(SpacingOption::None),
            "small" => Some(SpacingOption::Small),
            "medium" => Some(SpacingOption::Medium),
            "large" => Some(SpacingOption::Large),
            _ => None,
        }
    }

    /// The tag persisted in block attributes.
    pub fn tag(&self) -> &'static str {
        match self {
            SpacingOption::None => "",
            SpacingOption::Small => "small",
            SpacingOption::Medium => "medium",
            SpacingOption::Large => "large",
        }
    }

    /// Display label for the select control.
    pub fn label(&self) -> &'static str {
        match self {
            SpacingOption::None => "None",
            SpacingOption::Small => "Small",
            SpacingOption::Medium => "Medium",
            SpacingOption::Large => "Large",
        }
    }

    /// Margin size for this option; `None` maps to no declaration at all.
    pub fn margin(&self) -> Option<&'static str> {
        match self {
            SpacingOption::None => None,
            SpacingOption::Small => Some("5px"),
            SpacingOption::Medium => Some("15px"),
            SpacingOption::Large => Some("30px"),
        }
    }
}
