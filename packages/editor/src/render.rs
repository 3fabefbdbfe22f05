//! Edit rendering as a composable capability.
//!
//! A block type's edit surface is a [`EditRender`] value. Extensions
//! augment rendering by wrapping one boxed renderer in another
//! ([`BlockExtension::decorate_edit`](crate::BlockExtension::decorate_edit)),
//! so the chain is built explicitly by the registry and carries no runtime
//! type extension or global state.

use crate::inspector::InspectorPanel;
use blockkit_blocks::{BlockAttributes, BlockSettings, SaveElement, CLASS_ATTRIBUTE};
use serde::{Deserialize, Serialize};

/// Everything an edit renderer may read.
#[derive(Debug, Clone)]
pub struct EditContext<'a> {
    pub block: &'a str,
    pub attributes: &'a BlockAttributes,
}

/// What rendering an edit surface produces: the preview element plus any
/// inspector panels contributed along the way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditOutput {
    pub preview: SaveElement,
    pub panels: Vec<InspectorPanel>,
}

/// Render capability for a block's edit surface.
pub trait EditRender: std::fmt::Debug {
    fn render(&self, ctx: &EditContext<'_>) -> EditOutput;
}

/// Innermost renderer: previews the block type's own element with the
/// stored class and no panels. Decorators build on top of this.
#[derive(Debug, Clone)]
pub struct BaseEditRender {
    element: String,
}

impl BaseEditRender {
    pub fn for_block(settings: &BlockSettings) -> Self {
        Self {
            element: settings.element.clone(),
        }
    }
}

impl EditRender for BaseEditRender {
    fn render(&self, ctx: &EditContext<'_>) -> EditOutput {
        let mut preview = SaveElement::new(self.element.clone());
        if let Some(class) = ctx.attributes.get_str(CLASS_ATTRIBUTE) {
            if !class.is_empty() {
                preview = preview.with_attr("class", class);
            }
        }
        EditOutput {
            preview,
            panels: Vec::new(),
        }
    }
}
