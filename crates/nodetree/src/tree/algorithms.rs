//! Tree traversal algorithms.
//!
//! All walks are iterative (explicit stack or parent-chasing loop), so depth
//! is bounded by heap rather than call stack. They assume an acyclic tree.

use super::arena::Tree;
use super::types::NodeIndex;

/// Lazy pre-order walk over the descendants of a node (the node itself
/// excluded).
///
/// A node is yielded before its children, and a child's whole subtree is
/// yielded before its next sibling: `A, A1, A2, B, B1, …`.
pub struct PreOrder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrder<'a> {
    /// Start a walk below `start`.
    pub fn new(tree: &'a Tree, start: NodeIndex) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
        };
        walk.push_children(start);
        walk
    }

    fn push_children(&mut self, index: NodeIndex) {
        // Reversed so the first child is popped first
        self.stack
            .extend(self.tree.raw(index).children.iter().rev().copied());
    }
}

impl Iterator for PreOrder<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        let current = self.stack.pop()?;
        self.push_children(current);
        Some(current)
    }
}

/// Ancestors of `start`, nearest first: `[parent, grandparent, …, root]`.
pub fn ancestors(tree: &Tree, start: NodeIndex) -> Vec<NodeIndex> {
    let mut result = Vec::new();
    let mut current = tree.raw(start).parent;

    while let Some(index) = current {
        result.push(index);
        current = tree.raw(index).parent;
    }

    result
}

/// Number of parent links between `start` and the root.
pub fn depth(tree: &Tree, start: NodeIndex) -> usize {
    let mut level = 0;
    let mut current = tree.raw(start).parent;

    while let Some(index) = current {
        level += 1;
        current = tree.raw(index).parent;
    }

    level
}

/// The node `offset` positions away from `start` among its parent's
/// children.
///
/// Position is found by handle identity. Returns `None` for a node without
/// a parent or when the target position is out of bounds.
pub fn sibling_at(tree: &Tree, start: NodeIndex, offset: isize) -> Option<NodeIndex> {
    let parent = tree.raw(start).parent?;
    let siblings = &tree.raw(parent).children;
    let position = siblings.iter().position(|&index| index == start)?;

    let target = position.checked_add_signed(offset)?;
    siblings.get(target).copied()
}

/// Descend from `start` one level per path element, matching the string
/// form of property `key`.
pub fn follow_value_path(
    tree: &Tree,
    start: NodeIndex,
    key: &str,
    path: &[String],
) -> Option<NodeIndex> {
    if path.is_empty() {
        return None;
    }

    let mut current = start;
    for wanted in path {
        current = tree.raw(current).children.iter().copied().find(|&child| {
            tree.raw(child)
                .properties()
                .get(key)
                .is_some_and(|value| value.to_string() == *wanted)
        })?;
    }

    Some(current)
}
