//! Arena of rendered boxes

use std::collections::HashMap;

use super::metrics::{content_extent, Axis};
use super::types::{BoxId, BoxNode};
use crate::rotation::{self, NO_ROTATION};

/// Owns box nodes and resolves their parent handles.
///
/// Parent links are plain [`BoxId`]s, so a node never keeps its parent
/// alive and cycles cost nothing. A handle that does not resolve is treated
/// like a missing box.
#[derive(Debug, Clone, Default)]
pub struct BoxTree {
    nodes: Vec<BoxNode>,
    names: HashMap<String, BoxId>,
    /// Registered name per node, indexed by `BoxId`
    labels: Vec<Option<String>>,
}

impl BoxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its handle
    pub fn add(&mut self, node: BoxNode) -> BoxId {
        let id = BoxId(self.nodes.len());
        self.nodes.push(node);
        self.labels.push(None);
        id
    }

    /// Add a node reachable by name through [`BoxTree::lookup`].
    ///
    /// A later node with the same name shadows the earlier one.
    pub fn add_named(&mut self, name: impl Into<String>, node: BoxNode) -> BoxId {
        let name = name.into();
        let id = self.add(node);
        if let Some(shadowed) = self.names.insert(name.clone(), id) {
            self.labels[shadowed.0] = None;
        }
        self.labels[id.0] = Some(name);
        id
    }

    pub fn get(&self, id: BoxId) -> Option<&BoxNode> {
        self.nodes.get(id.0)
    }

    pub fn lookup(&self, name: &str) -> Option<BoxId> {
        self.names.get(name).copied()
    }

    /// Name a node was registered under, if any
    pub fn name_of(&self, id: BoxId) -> Option<&str> {
        self.labels.get(id.0)?.as_deref()
    }

    /// The immediate parent of `id`
    pub fn parent_of(&self, id: BoxId) -> Option<&BoxNode> {
        self.get(id)?.parent.and_then(|p| self.get(p))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All handles in insertion order
    pub fn ids(&self) -> impl Iterator<Item = BoxId> + '_ {
        (0..self.nodes.len()).map(BoxId)
    }

    fn extent(&self, id: Option<BoxId>, axis: Axis) -> i64 {
        match id {
            Some(id) => content_extent(self.get(id), self.parent_of(id), axis),
            None => 0,
        }
    }

    /// Height left after padding, border, and margin; `0` for a missing box
    pub fn content_height(&self, id: Option<BoxId>) -> i64 {
        self.extent(id, Axis::Vertical)
    }

    /// Width left after padding, border, and margin; `0` for a missing box
    pub fn content_width(&self, id: Option<BoxId>) -> i64 {
        self.extent(id, Axis::Horizontal)
    }

    /// Canonical angle of the box's rotation attribute
    pub fn rotation(&self, id: Option<BoxId>) -> f32 {
        match id.and_then(|id| self.get(id)) {
            Some(node) => rotation::parse_rotation(node.rotation.as_deref()),
            None => NO_ROTATION,
        }
    }

    pub fn has_rotation(&self, id: Option<BoxId>) -> bool {
        rotation::has_rotation(self.rotation(id))
    }

    pub fn rotation_as_string(&self, id: Option<BoxId>) -> String {
        rotation::rotation_as_string(self.rotation(id))
    }

    /// False for a missing box, otherwise whether its text runs vertically
    pub fn is_vertical_orientation(&self, id: Option<BoxId>) -> bool {
        self.resolves(id) && rotation::is_vertical_orientation(self.rotation(id))
    }

    /// False for a missing box, otherwise whether its text runs horizontally
    pub fn is_horizontal_orientation(&self, id: Option<BoxId>) -> bool {
        self.resolves(id) && rotation::is_horizontal_orientation(self.rotation(id))
    }

    fn resolves(&self, id: Option<BoxId>) -> bool {
        id.and_then(|id| self.get(id)).is_some()
    }
}
