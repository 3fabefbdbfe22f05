//! # Blockkit Editor
//!
//! Host-side composition for block extensions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ blocks: settings, attributes, save element  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: registry + lifecycle composition    │
//! │  - Register block types through extensions  │
//! │  - Decorate edit renderers                  │
//! │  - Apply attribute changes, refresh class   │
//! │  - Fold save props into the save element    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ extensions: spacing control, …              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Explicit composition**: the registry folds extensions in
//!    registration order at each lifecycle point; there is no global
//!    named-filter chain and no ordering ambiguity.
//! 2. **Attributes are source of truth**: class names and save styles are
//!    derived views, recomputed from current attribute values on every call.
//! 3. **Total hooks**: extensions never fail; blocks outside an extension's
//!    scope pass through untouched.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blockkit_blocks::BlockSettings;
//! use blockkit_editor::{AttributeChange, BlockRegistry};
//!
//! let mut registry = BlockRegistry::new();
//! registry.register_extension(Box::new(my_extension));
//! registry.register_block(BlockSettings::new("core/image", "Image", "img"))?;
//!
//! let mut image = registry.create_instance("core/image")?;
//! registry.apply_change(&mut image, AttributeChange::Set {
//!     key: "spacing".to_string(),
//!     value: "medium".into(),
//! });
//!
//! let saved = registry.save(&image)?;
//! ```

mod errors;
mod extension;
mod inspector;
mod instance;
mod registry;
mod render;

pub use errors::EditorError;
pub use extension::BlockExtension;
pub use inspector::{InspectorControl, InspectorPanel, SelectControl, SelectOption};
pub use instance::{AttributeChange, BlockInstance};
pub use registry::BlockRegistry;
pub use render::{BaseEditRender, EditContext, EditOutput, EditRender};

// Re-export the model types for convenience
pub use blockkit_blocks::{BlockAttributes, BlockSettings, SaveElement};
