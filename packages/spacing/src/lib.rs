//! # Blockkit Spacing
//!
//! Adds a spacing control to image blocks: a select in the block settings
//! sidebar whose choice becomes a `has-spacing-*` preview class in the
//! editor and a fixed inline margin in the saved markup.
//!
//! The mapping is pure and memoryless: class names and style declarations
//! are derived from current attribute values on every call, so repeated
//! edits never accumulate stale classes or declarations. Blocks outside the
//! extension's allow-list pass through every hook untouched.
//!
//! Two shipped configurations:
//! - [`SpacingExtension::bottom_margin`] — one `spacing` attribute driving
//!   the bottom margin (`has-spacing-small` → `margin-bottom: 5px`).
//! - [`SpacingExtension::split_margins`] — independent `spacingTop` and
//!   `spacingBottom` attributes (`has-spacing-top-small` → `margin-top: 5px`).

mod extension;
mod option;

pub use extension::{Edge, EdgeBinding, SpacingExtension};
pub use option::SpacingOption;
