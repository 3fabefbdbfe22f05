//! # Block Extensions
//!
//! Third-party additions to existing block types, expressed as explicit
//! lifecycle hooks.
//!
//! ## Design
//!
//! An extension can participate at three points of a block's life:
//! - **Registration**: adjust the block type's settings (usually its
//!   attribute schema) before the registry stores them.
//! - **Edit**: wrap the block's edit renderer to contribute inspector
//!   controls or rewrite the preview class, and recompute the editor class
//!   after every attribute change.
//! - **Save**: fold extra props (inline styles) into the persisted save
//!   element.
//!
//! Hooks are:
//! - **Pure**: outputs depend only on the inputs handed to them.
//! - **Total**: a hook never fails; blocks outside an extension's scope
//!   pass through untouched.
//! - **Ordered**: the registry folds extensions in registration order.

use crate::render::EditRender;
use blockkit_blocks::{BlockAttributes, BlockSettings, SaveElement, CLASS_ATTRIBUTE};

/// One extension of existing block types.
///
/// Every hook defaults to pass-through, so an implementation only overrides
/// the lifecycle points it cares about.
pub trait BlockExtension: std::fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Adjust a block type's settings at registration time.
    ///
    /// Must not drop attribute definitions the block already declares.
    fn extend_settings(&self, settings: BlockSettings) -> BlockSettings {
        settings
    }

    /// Wrap a block's edit renderer in an augmented one.
    fn decorate_edit(&self, inner: Box<dyn EditRender>) -> Box<dyn EditRender> {
        inner
    }

    /// Recompute the editor-facing class string from current attribute
    /// values. The default returns the stored class unchanged.
    fn editor_class_name(&self, block: &str, attributes: &BlockAttributes) -> String {
        let _ = block;
        attributes.get_str(CLASS_ATTRIBUTE).unwrap_or_default().to_owned()
    }

    /// Fold extra props into a block instance's save element.
    fn extend_save_props(
        &self,
        block: &str,
        attributes: &BlockAttributes,
        props: SaveElement,
    ) -> SaveElement {
        let _ = (block, attributes);
        props
    }
}
