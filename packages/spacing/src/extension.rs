//! The spacing extension: schema, class, and style derivation.

use crate::option::SpacingOption;
use blockkit_blocks::{AttributeDef, BlockAttributes, BlockSettings, ClassList, SaveElement, CLASS_ATTRIBUTE};
use blockkit_editor::{
    BlockExtension, EditContext, EditOutput, EditRender, InspectorControl, InspectorPanel,
    SelectControl, SelectOption,
};

/// Margin edge a spacing attribute controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    /// CSS property receiving the margin declaration.
    pub fn css_property(&self) -> &'static str {
        match self {
            Edge::Top => "margin-top",
            Edge::Bottom => "margin-bottom",
        }
    }

    /// Tag used in generated class names and control labels.
    pub fn tag(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }
}

/// Binding of one block attribute to one margin edge.
#[derive(Debug, Clone)]
pub struct EdgeBinding {
    /// Attribute key holding the selected option tag.
    pub attribute: String,
    /// Edge whose margin the option controls.
    pub edge: Edge,
    /// Whether generated class names carry the edge tag
    /// (`has-spacing-top-small` rather than plain `has-spacing-small`).
    pub tagged_class: bool,
}

impl EdgeBinding {
    fn class_stem(&self) -> String {
        if self.tagged_class {
            format!("has-spacing-{}", self.edge.tag())
        } else {
            "has-spacing".to_string()
        }
    }

    /// Class token for the given option; `None` option emits no class.
    fn class_for(&self, option: SpacingOption) -> Option<String> {
        (option != SpacingOption::None)
            .then(|| format!("{}-{}", self.class_stem(), option.tag()))
    }

    /// Current selection read from the attributes; missing, non-string, and
    /// unknown values all read as no selection.
    fn option_from(&self, attributes: &BlockAttributes) -> SpacingOption {
        attributes
            .get_str(&self.attribute)
            .and_then(SpacingOption::from_tag)
            .unwrap_or_default()
    }

    /// Whether `token` is a class this binding could have emitted earlier.
    fn is_spacing_class(&self, token: &str) -> bool {
        token
            .strip_prefix(self.class_stem().as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(SpacingOption::from_tag)
            .is_some()
    }

    fn control_label(&self) -> String {
        if self.tagged_class {
            let tag = self.edge.tag();
            let mut label = String::new();
            label.push_str(&tag[..1].to_uppercase());
            label.push_str(&tag[1..]);
            label.push_str(" spacing");
            label
        } else {
            "Spacing".to_string()
        }
    }
}

/// Adds spacing controls to an allow-listed set of block types.
///
/// All derivation is a pure function of current attribute values; the
/// extension holds configuration only.
#[derive(Debug, Clone)]
pub struct SpacingExtension {
    blocks: Vec<String>,
    edges: Vec<EdgeBinding>,
}

impl SpacingExtension {
    /// One `spacing` attribute driving the bottom margin of image blocks.
    pub fn bottom_margin() -> Self {
        Self {
            blocks: vec!["core/image".to_string()],
            edges: vec![EdgeBinding {
                attribute: "spacing".to_string(),
                edge: Edge::Bottom,
                tagged_class: false,
            }],
        }
    }

    /// Independent `spacingTop` and `spacingBottom` attributes.
    pub fn split_margins() -> Self {
        Self {
            blocks: vec!["core/image".to_string()],
            edges: vec![
                EdgeBinding {
                    attribute: "spacingTop".to_string(),
                    edge: Edge::Top,
                    tagged_class: true,
                },
                EdgeBinding {
                    attribute: "spacingBottom".to_string(),
                    edge: Edge::Bottom,
                    tagged_class: true,
                },
            ],
        }
    }

    /// Replace the allow-list of block types that get spacing controls.
    pub fn for_blocks<I, S>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks = blocks.into_iter().map(Into::into).collect();
        self
    }

    pub fn edges(&self) -> &[EdgeBinding] {
        &self.edges
    }

    fn enabled_for(&self, block: &str) -> bool {
        self.blocks.iter().any(|b| b == block)
    }

    /// Recompute the editor class string from current attribute values.
    ///
    /// Starts from the stored class string, strips every spacing class a
    /// bound edge could have emitted, then appends the class for each edge
    /// whose current option is set. Calling this twice in a row yields the
    /// same string as calling it once.
    pub fn class_name(&self, block: &str, attributes: &BlockAttributes) -> String {
        let existing = attributes.get_str(CLASS_ATTRIBUTE).unwrap_or_default();
        if !self.enabled_for(block) {
            return existing.to_owned();
        }
        let mut classes = ClassList::parse(existing);
        for binding in &self.edges {
            classes.remove_where(|token| binding.is_spacing_class(token));
            if let Some(class) = binding.class_for(binding.option_from(attributes)) {
                classes.push(class);
            }
        }
        classes.to_string()
    }

    /// Merge a margin declaration for each bound edge whose option maps
    /// into the margin table. Each edge is derived independently from the
    /// attributes, and unrelated style keys are preserved.
    pub fn save_props(
        &self,
        block: &str,
        attributes: &BlockAttributes,
        props: SaveElement,
    ) -> SaveElement {
        if !self.enabled_for(block) {
            return props;
        }
        let mut props = props;
        for binding in &self.edges {
            if let Some(margin) = binding.option_from(attributes).margin() {
                props.set_style(binding.edge.css_property(), margin);
            }
        }
        props
    }

    /// The settings panel for the bound edges, with current selections.
    fn panel(&self, attributes: &BlockAttributes) -> InspectorPanel {
        InspectorPanel {
            title: "Spacing".to_string(),
            initial_open: true,
            controls: self
                .edges
                .iter()
                .map(|binding| {
                    InspectorControl::Select(SelectControl {
                        label: binding.control_label(),
                        attribute: binding.attribute.clone(),
                        value: binding.option_from(attributes).tag().to_string(),
                        options: SpacingOption::ALL
                            .iter()
                            .map(|option| SelectOption {
                                label: option.label().to_string(),
                                value: option.tag().to_string(),
                            })
                            .collect(),
                    })
                })
                .collect(),
        }
    }
}

impl BlockExtension for SpacingExtension {
    fn name(&self) -> &str {
        "spacing"
    }

    fn extend_settings(&self, settings: BlockSettings) -> BlockSettings {
        if !self.enabled_for(&settings.name) {
            return settings;
        }
        self.edges.iter().fold(settings, |settings, binding| {
            settings.with_attribute(
                binding.attribute.clone(),
                AttributeDef::string(SpacingOption::None.tag()),
            )
        })
    }

    fn decorate_edit(&self, inner: Box<dyn EditRender>) -> Box<dyn EditRender> {
        Box::new(WithSpacingControl {
            inner,
            extension: self.clone(),
        })
    }

    fn editor_class_name(&self, block: &str, attributes: &BlockAttributes) -> String {
        self.class_name(block, attributes)
    }

    fn extend_save_props(
        &self,
        block: &str,
        attributes: &BlockAttributes,
        props: SaveElement,
    ) -> SaveElement {
        self.save_props(block, attributes, props)
    }
}

/// Decorated edit renderer: renders the inner surface, rewrites the preview
/// class, and appends the spacing panel.
#[derive(Debug)]
struct WithSpacingControl {
    inner: Box<dyn EditRender>,
    extension: SpacingExtension,
}

impl EditRender for WithSpacingControl {
    fn render(&self, ctx: &EditContext<'_>) -> EditOutput {
        let mut output = self.inner.render(ctx);
        if !self.extension.enabled_for(ctx.block) {
            return output;
        }
        let class = self.extension.class_name(ctx.block, ctx.attributes);
        if class.is_empty() {
            output.preview.attributes.remove("class");
        } else {
            output.preview.attributes.insert("class".to_string(), class);
        }
        output.panels.push(self.extension.panel(ctx.attributes));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_strips_stale_class_on_change() {
        let ext = SpacingExtension::bottom_margin();
        let attrs = BlockAttributes::new()
            .with(CLASS_ATTRIBUTE, "wp-image has-spacing-small")
            .with("spacing", "large");

        let class = ext.class_name("core/image", &attrs);
        assert_eq!(class, "wp-image has-spacing-large");
    }

    #[test]
    fn test_class_name_is_idempotent() {
        let ext = SpacingExtension::bottom_margin();
        let mut attrs = BlockAttributes::new().with("spacing", "medium");

        let once = ext.class_name("core/image", &attrs);
        attrs.set(CLASS_ATTRIBUTE, once.clone());
        let twice = ext.class_name("core/image", &attrs);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_class_name_passthrough_outside_allow_list() {
        let ext = SpacingExtension::bottom_margin();
        let attrs = BlockAttributes::new()
            .with(CLASS_ATTRIBUTE, "  custom   class ")
            .with("spacing", "large");

        // Not even whitespace normalization applies to foreign blocks.
        assert_eq!(ext.class_name("core/paragraph", &attrs), "  custom   class ");
    }

    #[test]
    fn test_split_variant_classes_are_independent() {
        let ext = SpacingExtension::split_margins();
        let attrs = BlockAttributes::new()
            .with("spacingTop", "small")
            .with("spacingBottom", "large");

        assert_eq!(
            ext.class_name("core/image", &attrs),
            "has-spacing-top-small has-spacing-bottom-large"
        );
    }

    #[test]
    fn test_untagged_stem_does_not_strip_tagged_classes() {
        let ext = SpacingExtension::bottom_margin();
        let attrs = BlockAttributes::new()
            .with(CLASS_ATTRIBUTE, "has-spacing-top-small")
            .with("spacing", "medium");

        // A `has-spacing-top-*` token is not one this binding emits.
        let class = ext.class_name("core/image", &attrs);
        assert_eq!(class, "has-spacing-top-small has-spacing-medium");
    }

    #[test]
    fn test_save_props_derives_each_edge_from_attributes() {
        let ext = SpacingExtension::split_margins();
        let attrs = BlockAttributes::new()
            .with("spacingTop", "small")
            .with("spacingBottom", "large");

        let props = ext.save_props("core/image", &attrs, SaveElement::new("img"));
        assert_eq!(props.styles.get("margin-top").map(String::as_str), Some("5px"));
        assert_eq!(props.styles.get("margin-bottom").map(String::as_str), Some("30px"));
        assert_eq!(props.styles.len(), 2);
    }

    #[test]
    fn test_save_props_preserves_unrelated_styles() {
        let ext = SpacingExtension::bottom_margin();
        let attrs = BlockAttributes::new().with("spacing", "medium");
        let base = SaveElement::new("img").with_style("border-radius", "4px");

        let props = ext.save_props("core/image", &attrs, base);
        assert_eq!(props.styles.get("border-radius").map(String::as_str), Some("4px"));
        assert_eq!(props.styles.get("margin-bottom").map(String::as_str), Some("15px"));
    }

    #[test]
    fn test_save_props_empty_and_unknown_contribute_nothing() {
        let ext = SpacingExtension::bottom_margin();
        let base = SaveElement::new("img");

        let unset = BlockAttributes::new().with("spacing", "");
        assert!(ext.save_props("core/image", &unset, base.clone()).styles.is_empty());

        let malformed = BlockAttributes::new().with("spacing", "huge");
        assert!(ext.save_props("core/image", &malformed, base).styles.is_empty());
    }

    #[test]
    fn test_extend_settings_adds_defs_without_dropping_existing() {
        let ext = SpacingExtension::split_margins();
        let settings = BlockSettings::new("core/image", "Image", "img")
            .with_attribute("url", AttributeDef::string(""));

        let settings = ext.extend_settings(settings);
        assert!(settings.attributes.contains_key("url"));
        assert_eq!(settings.attributes["spacingTop"].default, String::new());
        assert_eq!(settings.attributes["spacingBottom"].default, String::new());

        // Folding again changes nothing.
        let again = ext.extend_settings(settings.clone());
        assert_eq!(again, settings);
    }

    #[test]
    fn test_for_blocks_replaces_allow_list() {
        let ext = SpacingExtension::bottom_margin().for_blocks(["core/gallery"]);
        let attrs = BlockAttributes::new().with("spacing", "small");

        assert_eq!(ext.class_name("core/gallery", &attrs), "has-spacing-small");
        assert_eq!(ext.class_name("core/image", &attrs), "");
    }

    #[test]
    fn test_extend_settings_passthrough_outside_allow_list() {
        let ext = SpacingExtension::bottom_margin();
        let settings = BlockSettings::new("core/paragraph", "Paragraph", "p");
        assert_eq!(ext.extend_settings(settings.clone()), settings);
    }
}
