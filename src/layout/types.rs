//! Box model types for rendered layout nodes.
//!
//! Dimensions are integer layout units as produced by the layout engine.

/// Handle to a box inside a [`BoxTree`](super::BoxTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub usize);

/// Padding on each side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxDefinition {
    pub padding_top: i64,
    pub padding_bottom: i64,
    pub padding_left: i64,
    pub padding_right: i64,
}

impl BoxDefinition {
    /// Same padding on all four sides
    pub fn uniform(padding: i64) -> Self {
        Self {
            padding_top: padding,
            padding_bottom: padding,
            padding_left: padding,
            padding_right: padding,
        }
    }
}

/// Border widths and margins resolved for a box at layout time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticBoxLayoutProperties {
    pub border_top: i64,
    pub border_bottom: i64,
    pub border_left: i64,
    pub border_right: i64,
    pub margin_top: i64,
    pub margin_bottom: i64,
    pub margin_left: i64,
    pub margin_right: i64,
}

/// A rendered box as seen after layout.
///
/// The parent is a non-owning [`BoxId`]; the tree that owns the nodes
/// resolves it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoxNode {
    pub parent: Option<BoxId>,
    pub width: i64,
    pub height: i64,
    pub box_definition: Option<BoxDefinition>,
    pub static_properties: Option<StaticBoxLayoutProperties>,
    /// Raw value of the element's `rotation` attribute, if any
    pub rotation: Option<String>,
}

impl BoxNode {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_parent(mut self, parent: BoxId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_box_definition(mut self, definition: BoxDefinition) -> Self {
        self.box_definition = Some(definition);
        self
    }

    pub fn with_static_properties(mut self, properties: StaticBoxLayoutProperties) -> Self {
        self.static_properties = Some(properties);
        self
    }

    pub fn with_rotation(mut self, rotation: impl Into<String>) -> Self {
        self.rotation = Some(rotation.into());
        self
    }
}
