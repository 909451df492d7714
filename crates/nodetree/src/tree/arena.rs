//! The node arena and its linking operation.

use super::algorithms;
use super::node_ref::NodeRef;
use super::types::{Node, NodeIndex};
use crate::error::{Result, TreeError};
use log::trace;
use std::collections::HashMap;

/// Arena owning every node of one tree.
///
/// Nodes are inserted detached and linked with [`Tree::add_child`]. The
/// arena never removes nodes, so a [`NodeIndex`] stays valid for the life of
/// the tree.
///
/// The parent/child graph must be acyclic. Nothing here checks that; walking
/// a cycle never terminates.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    // String form of `id` -> first node inserted with that id
    by_id: HashMap<String, NodeIndex>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Create an empty tree with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            by_id: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a detached node and return its handle.
    pub fn insert(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len());
        let id = node.id().to_string();
        trace!("Inserting node: id={id}, index={index}");
        self.by_id.entry(id).or_insert(index);
        self.nodes.push(node);
        index
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// Sets the child's parent link and overwrites its `parent` property with
    /// the parent's id. Attaching the same child twice, or attaching an
    /// ancestor below its descendant, is not detected.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NodeNotFound`] if either handle is not from this tree.
    pub fn add_child(&mut self, parent: NodeIndex, child: NodeIndex) -> Result<()> {
        let parent_id = self.node_data(parent)?.id().clone();
        self.node_data(child)?;
        trace!("Linking node {child} under {parent} (parent id {parent_id})");

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].set_parent(parent, parent_id);
        Ok(())
    }

    /// Get a view of a node.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NodeNotFound`] if the handle is not from this tree.
    pub fn get(&self, index: NodeIndex) -> Result<NodeRef<'_>> {
        self.node_data(index)?;
        Ok(NodeRef::new(self, index))
    }

    /// Get a view of a node, or `None` for a foreign handle.
    pub fn node(&self, index: NodeIndex) -> Option<NodeRef<'_>> {
        (index.0 < self.nodes.len()).then(|| NodeRef::new(self, index))
    }

    /// Get the raw node record.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NodeNotFound`] if the handle is not from this tree.
    pub fn node_data(&self, index: NodeIndex) -> Result<&Node> {
        self.nodes.get(index.0).ok_or_else(|| TreeError::NodeNotFound {
            node_id: index.to_string(),
        })
    }

    /// Number of nodes in the arena, linked or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The first inserted node that has no parent.
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.nodes
            .iter()
            .position(|node| node.parent.is_none())
            .map(|pos| NodeRef::new(self, NodeIndex(pos)))
    }

    /// Children of the root, i.e. the top-level records of a built tree.
    pub fn root_nodes(&self) -> Vec<NodeRef<'_>> {
        self.root().map(|root| root.children()).unwrap_or_default()
    }

    /// Every node below the root, in pre-order.
    pub fn nodes(&self) -> Vec<NodeRef<'_>> {
        self.root().map(|root| root.descendants()).unwrap_or_default()
    }

    /// Find a node by the string form of its `id` property.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NodeNotFound`] if no node carries that id.
    pub fn node_by_id(&self, id: impl ToString) -> Result<NodeRef<'_>> {
        let id = id.to_string();
        match self.by_id.get(&id) {
            Some(index) => Ok(NodeRef::new(self, *index)),
            None => Err(TreeError::NodeNotFound { node_id: id }),
        }
    }

    /// Follow a path of property values down from the root.
    ///
    /// At each level the first child whose `key` property has the string form
    /// of the next value is taken. Returns `None` when a step does not match
    /// or the path is empty.
    pub fn node_by_value_path<V: ToString>(&self, key: &str, values: &[V]) -> Option<NodeRef<'_>> {
        let root = self.root()?;
        let path: Vec<String> = values.iter().map(ToString::to_string).collect();
        algorithms::follow_value_path(self, root.index(), key, &path)
            .map(|index| NodeRef::new(self, index))
    }

    pub(crate) fn raw(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0]
    }
}
