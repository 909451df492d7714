//! Read-only node views and the structural queries on them.

use super::algorithms::{self, PreOrder};
use super::arena::Tree;
use super::property::{PropertyMap, PropertyValue};
use super::types::{Node, NodeIndex};
use crate::error::{Result, TreeError};
use std::fmt;

/// Borrowed view of one node in a [`Tree`].
///
/// A `NodeRef` is `Copy` and cheap to pass around. Every query returns fresh
/// vectors of views, so callers can reorder or drop them freely without
/// touching the tree.
///
/// Two views are equal when they point at the same node of the same tree;
/// this is identity, not id equality.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    index: NodeIndex,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a Tree, index: NodeIndex) -> Self {
        Self { tree, index }
    }

    fn view(&self, index: NodeIndex) -> NodeRef<'a> {
        NodeRef::new(self.tree, index)
    }

    fn views(&self, indices: impl IntoIterator<Item = NodeIndex>) -> Vec<NodeRef<'a>> {
        indices.into_iter().map(|index| self.view(index)).collect()
    }

    /// Handle of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// The tree this node belongs to.
    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    /// The underlying node record.
    pub fn data(&self) -> &'a Node {
        self.tree.raw(self.index)
    }

    // ---- properties ----

    /// Case-insensitive property lookup.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::MissingProperty`] if the node has no such key.
    pub fn get(&self, name: &str) -> Result<&'a PropertyValue> {
        self.properties()
            .get(name)
            .ok_or_else(|| TreeError::MissingProperty {
                name: name.to_string(),
                node_id: self.get_id().to_string(),
            })
    }

    /// Value of the `id` property, [`PropertyValue::Null`] when absent.
    pub fn get_id(&self) -> &'a PropertyValue {
        self.data().id()
    }

    /// Resolve a `get<Name>` accessor name, e.g. `"getTitle"` reads `title`.
    ///
    /// The prefix is matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidAccessor`] if the name has no `get`
    /// prefix or names no stored property.
    pub fn accessor(&self, name: &str) -> Result<&'a PropertyValue> {
        let invalid = || TreeError::InvalidAccessor {
            name: name.to_string(),
            node_id: self.get_id().to_string(),
        };

        let property = name
            .get(..3)
            .filter(|prefix| prefix.eq_ignore_ascii_case("get"))
            .map(|_| &name[3..])
            .filter(|rest| !rest.is_empty())
            .ok_or_else(invalid)?;

        self.properties().get(property).ok_or_else(invalid)
    }

    /// The node's property bag.
    pub fn properties(&self) -> &'a PropertyMap {
        self.data().properties()
    }

    /// Owned copy of the property bag.
    pub fn to_map(&self) -> PropertyMap {
        self.properties().clone()
    }

    // ---- parent & children ----

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.data().parent.map(|index| self.view(index))
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        self.views(self.data().children.iter().copied())
    }

    /// Whether the node has any children.
    pub fn has_children(&self) -> bool {
        !self.data().children.is_empty()
    }

    /// Number of direct children.
    pub fn count_children(&self) -> usize {
        self.data().children.len()
    }

    // ---- siblings ----

    /// The node `offset` positions away among the parent's children.
    pub fn sibling(&self, offset: isize) -> Option<NodeRef<'a>> {
        algorithms::sibling_at(self.tree, self.index, offset).map(|index| self.view(index))
    }

    /// The sibling right before this node.
    pub fn preceding_sibling(&self) -> Option<NodeRef<'a>> {
        self.sibling(-1)
    }

    /// The sibling right after this node.
    pub fn following_sibling(&self) -> Option<NodeRef<'a>> {
        self.sibling(1)
    }

    /// The parent's other children.
    ///
    /// Excludes every child whose id has the same string form as this
    /// node's id, so distinct nodes sharing an id drop out together.
    pub fn siblings(&self) -> Vec<NodeRef<'a>> {
        let own_id = self.get_id().to_string();
        match self.parent() {
            Some(parent) => parent
                .children()
                .into_iter()
                .filter(|sibling| sibling.get_id().to_string() != own_id)
                .collect(),
            None => Vec::new(),
        }
    }

    /// The parent's children, this node included, in order. `[self]` for
    /// the root.
    pub fn siblings_and_self(&self) -> Vec<NodeRef<'a>> {
        match self.parent() {
            Some(parent) => parent.children(),
            None => vec![*self],
        }
    }

    // ---- subtree & path ----

    /// Lazy pre-order iterator over the descendants.
    pub fn descendants_iter(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        PreOrder::new(tree, self.index).map(move |index| NodeRef::new(tree, index))
    }

    /// All descendants in pre-order, this node excluded.
    pub fn descendants(&self) -> Vec<NodeRef<'a>> {
        self.descendants_iter().collect()
    }

    /// This node followed by its descendants in pre-order.
    pub fn descendants_and_self(&self) -> Vec<NodeRef<'a>> {
        std::iter::once(*self).chain(self.descendants_iter()).collect()
    }

    /// The path to the root, nearest first: `[parent, …, root]`.
    pub fn ancestors(&self) -> Vec<NodeRef<'a>> {
        self.views(algorithms::ancestors(self.tree, self.index))
    }

    /// `[self, parent, …, root]`.
    pub fn ancestors_and_self(&self) -> Vec<NodeRef<'a>> {
        let mut path = Vec::with_capacity(1);
        path.push(*self);
        path.extend(self.ancestors());
        path
    }

    /// Depth below the root; the root is level 0.
    pub fn level(&self) -> usize {
        algorithms::depth(self.tree, self.index)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("id", self.get_id())
            .finish()
    }
}

/// The string form of the node's id.
impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get_id(), f)
    }
}
