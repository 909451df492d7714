//! Core tree types: node handles and the node record itself.

use super::property::{PropertyMap, PropertyValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a node inside its [`Tree`](super::Tree) arena.
///
/// Handles are assigned in insertion order and are only meaningful for the
/// tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Property key holding a node's identity.
pub const ID_KEY: &str = "id";

/// Property key holding the identity of a node's parent.
pub const PARENT_KEY: &str = "parent";

static NULL_VALUE: PropertyValue = PropertyValue::Null;

/// A node of the tree: a property bag plus its structural links.
///
/// `children` is the owning relation (in the sense that it defines the
/// tree's shape and order); `parent` is a back-reference only. Both are
/// changed exclusively by [`Tree::add_child`](super::Tree::add_child).
#[derive(Debug, Clone, Default)]
pub struct Node {
    properties: PropertyMap,
    pub(crate) parent: Option<NodeIndex>,
    pub(crate) children: Vec<NodeIndex>,
}

impl Node {
    /// Create a detached node from a property record.
    pub fn new(properties: PropertyMap) -> Self {
        Self {
            properties,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Create a detached node from `(key, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: Into<PropertyValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::new(pairs.into_iter().collect())
    }

    /// The node's property bag.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Value of the `id` property, or [`PropertyValue::Null`] when absent.
    pub fn id(&self) -> &PropertyValue {
        self.properties.get(ID_KEY).unwrap_or(&NULL_VALUE)
    }

    /// Handle of the parent node, if linked.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Handles of the children, in insertion order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    pub(crate) fn set_parent(&mut self, parent: NodeIndex, parent_id: PropertyValue) {
        self.parent = Some(parent);
        self.properties.insert(PARENT_KEY, parent_id);
    }
}
