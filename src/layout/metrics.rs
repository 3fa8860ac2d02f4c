//! Content-box extents with per-edge parent fallback.
//!
//! A rendered box sometimes loses its own padding, border, or margin during
//! layout while the wrapper around it still carries the effective value. To
//! approximate the content box, every edge is resolved independently:
//!
//! 1. the box's own value, if positive
//! 2. otherwise the immediate parent's value, if positive
//! 3. otherwise nothing
//!
//! Grandparents are never consulted.

use log::debug;

use super::types::BoxNode;

/// One side of one box-model layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    PaddingTop,
    PaddingBottom,
    PaddingLeft,
    PaddingRight,
    BorderTop,
    BorderBottom,
    BorderLeft,
    BorderRight,
    MarginTop,
    MarginBottom,
    MarginLeft,
    MarginRight,
}

impl Edge {
    /// The value `node` defines for this edge.
    ///
    /// `None` when the node lacks the layer the edge belongs to: padding
    /// lives in the box definition, border and margin in the static layout
    /// properties.
    pub fn value_in(self, node: &BoxNode) -> Option<i64> {
        if let Some(padding) = node.box_definition.as_ref() {
            match self {
                Edge::PaddingTop => return Some(padding.padding_top),
                Edge::PaddingBottom => return Some(padding.padding_bottom),
                Edge::PaddingLeft => return Some(padding.padding_left),
                Edge::PaddingRight => return Some(padding.padding_right),
                _ => {}
            }
        }

        let props = node.static_properties.as_ref()?;
        match self {
            Edge::BorderTop => Some(props.border_top),
            Edge::BorderBottom => Some(props.border_bottom),
            Edge::BorderLeft => Some(props.border_left),
            Edge::BorderRight => Some(props.border_right),
            Edge::MarginTop => Some(props.margin_top),
            Edge::MarginBottom => Some(props.margin_bottom),
            Edge::MarginLeft => Some(props.margin_left),
            Edge::MarginRight => Some(props.margin_right),
            _ => None,
        }
    }
}

/// Direction of a content extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Height: top and bottom edges
    Vertical,
    /// Width: left and right edges
    Horizontal,
}

impl Axis {
    /// The six edges deducted along this axis
    pub fn edges(self) -> &'static [Edge; 6] {
        match self {
            Axis::Vertical => &[
                Edge::PaddingTop,
                Edge::PaddingBottom,
                Edge::BorderTop,
                Edge::BorderBottom,
                Edge::MarginTop,
                Edge::MarginBottom,
            ],
            Axis::Horizontal => &[
                Edge::PaddingLeft,
                Edge::PaddingRight,
                Edge::BorderLeft,
                Edge::BorderRight,
                Edge::MarginLeft,
                Edge::MarginRight,
            ],
        }
    }

    /// The node's outer size along this axis
    pub fn extent_of(self, node: &BoxNode) -> i64 {
        match self {
            Axis::Vertical => node.height,
            Axis::Horizontal => node.width,
        }
    }
}

/// Amount to deduct for `edge`: own value if positive, else the parent's if
/// positive, else zero.
pub fn edge_inset(node: &BoxNode, parent: Option<&BoxNode>, edge: Edge) -> i64 {
    if let Some(own) = edge.value_in(node).filter(|v| *v > 0) {
        return own;
    }

    match parent.and_then(|p| edge.value_in(p)).filter(|v| *v > 0) {
        Some(inherited) => {
            debug!("{:?} taken from parent box: {}", edge, inherited);
            inherited
        }
        None => 0,
    }
}

/// Outer extent of `node` along `axis` minus the six resolved edge insets.
///
/// A missing node measures `0`. The result may be negative when insets
/// exceed the box, and saturates at `i64::MIN` instead of overflowing.
pub fn content_extent(node: Option<&BoxNode>, parent: Option<&BoxNode>, axis: Axis) -> i64 {
    let Some(node) = node else {
        return 0;
    };

    axis.edges()
        .iter()
        .fold(axis.extent_of(node), |extent, edge| {
            extent.saturating_sub(edge_inset(node, parent, *edge))
        })
}

/// Content height of `node`; see [`content_extent`]
pub fn content_height(node: Option<&BoxNode>, parent: Option<&BoxNode>) -> i64 {
    content_extent(node, parent, Axis::Vertical)
}

/// Content width of `node`; see [`content_extent`]
pub fn content_width(node: Option<&BoxNode>, parent: Option<&BoxNode>) -> i64 {
    content_extent(node, parent, Axis::Horizontal)
}
