//! # Block Registry
//!
//! Host-side owner of registered block types and the ordered extension
//! stack. The registry drives the three lifecycle points extensions can
//! hook: settings at registration, edit rendering, and save props.
//!
//! Extensions run as explicit folds in registration order, so the result
//! of stacking several extensions is deterministic and inspectable.

use crate::errors::EditorError;
use crate::extension::BlockExtension;
use crate::instance::{AttributeChange, BlockInstance};
use crate::render::{BaseEditRender, EditContext, EditOutput, EditRender};
use blockkit_blocks::{BlockAttributes, BlockSettings, SaveElement, CLASS_ATTRIBUTE};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct BlockRegistry {
    types: HashMap<String, BlockSettings>,
    extensions: Vec<Box<dyn BlockExtension>>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an extension to the stack. Extensions registered earlier run
    /// earlier at every lifecycle point.
    pub fn register_extension(&mut self, extension: Box<dyn BlockExtension>) {
        debug!(extension = extension.name(), "registered extension");
        self.extensions.push(extension);
    }

    /// Register a block type, folding every extension's settings hook over
    /// its declared settings.
    pub fn register_block(&mut self, settings: BlockSettings) -> Result<(), EditorError> {
        if self.types.contains_key(&settings.name) {
            return Err(EditorError::DuplicateBlockType(settings.name));
        }
        let name = settings.name.clone();
        let settings = self
            .extensions
            .iter()
            .fold(settings, |s, ext| ext.extend_settings(s));
        debug!(block = %name, attributes = settings.attributes.len(), "registered block type");
        self.types.insert(name, settings);
        Ok(())
    }

    /// Settings a block type ended up with after extension folds.
    pub fn settings(&self, block: &str) -> Option<&BlockSettings> {
        self.types.get(block)
    }

    /// Attribute map seeded from the block type's schema defaults.
    pub fn default_attributes(&self, block: &str) -> Result<BlockAttributes, EditorError> {
        let settings = self.lookup(block)?;
        let mut attributes = BlockAttributes::new();
        for (key, def) in &settings.attributes {
            attributes.set(key.clone(), def.default.clone());
        }
        Ok(attributes)
    }

    /// Instantiate a block with schema defaults.
    pub fn create_instance(&self, block: &str) -> Result<BlockInstance, EditorError> {
        Ok(BlockInstance::new(block, self.default_attributes(block)?))
    }

    /// Build the decorated edit renderer for an instance's block type and
    /// render it.
    pub fn edit_output(&self, instance: &BlockInstance) -> Result<EditOutput, EditorError> {
        let settings = self.lookup(&instance.block)?;
        let mut renderer: Box<dyn EditRender> = Box::new(BaseEditRender::for_block(settings));
        for extension in &self.extensions {
            renderer = extension.decorate_edit(renderer);
        }
        Ok(renderer.render(&EditContext {
            block: &instance.block,
            attributes: &instance.attributes,
        }))
    }

    /// Apply a change to an instance, then recompute its editor class
    /// through every extension.
    pub fn apply_change(&self, instance: &mut BlockInstance, change: AttributeChange) {
        instance.apply(change);
        self.refresh_editor_class(instance);
    }

    /// Recompute the `className` attribute from current attribute values.
    ///
    /// Each extension starts from the then-current class string, so
    /// repeated refreshes are stable and stale fragments never accumulate.
    pub fn refresh_editor_class(&self, instance: &mut BlockInstance) {
        for extension in &self.extensions {
            let class = extension.editor_class_name(&instance.block, &instance.attributes);
            if class.is_empty() {
                instance.attributes.remove(CLASS_ATTRIBUTE);
            } else {
                instance.attributes.set(CLASS_ATTRIBUTE, class);
            }
        }
    }

    /// Compute the persisted save element for an instance: the block type's
    /// own element, folded through every extension's save hook.
    pub fn save(&self, instance: &BlockInstance) -> Result<SaveElement, EditorError> {
        let settings = self.lookup(&instance.block)?;
        let mut props = SaveElement::new(settings.element.clone());
        if let Some(class) = instance.attributes.get_str(CLASS_ATTRIBUTE) {
            if !class.is_empty() {
                props = props.with_attr("class", class);
            }
        }
        let props = self.extensions.iter().fold(props, |p, ext| {
            ext.extend_save_props(&instance.block, &instance.attributes, p)
        });
        debug!(block = %instance.block, styles = props.styles.len(), "computed save element");
        Ok(props)
    }

    fn lookup(&self, block: &str) -> Result<&BlockSettings, EditorError> {
        self.types
            .get(block)
            .ok_or_else(|| EditorError::UnknownBlockType(block.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_registration_is_an_error() {
        let mut registry = BlockRegistry::new();
        registry
            .register_block(BlockSettings::new("core/image", "Image", "img"))
            .unwrap();

        let err = registry
            .register_block(BlockSettings::new("core/image", "Image", "img"))
            .unwrap_err();
        assert_eq!(err, EditorError::DuplicateBlockType("core/image".to_string()));
    }

    #[test]
    fn test_save_on_unknown_block_is_an_error() {
        let registry = BlockRegistry::new();
        let instance = BlockInstance::new("core/gallery", BlockAttributes::new());
        assert_eq!(
            registry.save(&instance).unwrap_err(),
            EditorError::UnknownBlockType("core/gallery".to_string())
        );
    }

    #[test]
    fn test_default_attributes_follow_schema() {
        use blockkit_blocks::AttributeDef;

        let mut registry = BlockRegistry::new();
        registry
            .register_block(
                BlockSettings::new("core/image", "Image", "img")
                    .with_attribute("url", AttributeDef::string(""))
                    .with_attribute("spacing", AttributeDef::string("")),
            )
            .unwrap();

        let attributes = registry.default_attributes("core/image").unwrap();
        assert_eq!(attributes.get_str("url"), Some(""));
        assert_eq!(attributes.get_str("spacing"), Some(""));
    }
}
