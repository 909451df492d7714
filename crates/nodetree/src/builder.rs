//! Building a linked tree from flat id/parent records.
//!
//! The builder only uses the public construction and linking operations of
//! [`Tree`]: it inserts one node per record, then calls
//! [`Tree::add_child`] ancestor-first so every parent is linked before its
//! children.

use crate::error::{Result, TreeError};
use crate::tree::{Node, NodeIndex, PropertyMap, PropertyValue, Tree, ID_KEY, PARENT_KEY};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What to do with a record whose parent id matches no other record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingParentPolicy {
    /// Fail the build with [`TreeError::InvalidParent`]
    #[default]
    Error,
    /// Attach the record directly under the root
    AttachToRoot,
    /// Leave the record detached (it stays in the arena, unreachable)
    Skip,
}

/// Configuration for [`TreeBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Id given to the synthetic root; records with this parent are top-level
    pub root_id: PropertyValue,

    /// Record key holding the node id (renamed to `id` on the node)
    pub id_key: String,

    /// Record key holding the parent id (renamed to `parent` on the node)
    pub parent_key: String,

    /// Handling of records that reference a non-existent parent
    pub missing_parent: MissingParentPolicy,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            root_id: PropertyValue::Int(0),
            id_key: ID_KEY.to_string(),
            parent_key: PARENT_KEY.to_string(),
            missing_parent: MissingParentPolicy::Error,
        }
    }
}

impl BuildOptions {
    /// Set the root id
    pub fn with_root_id(mut self, root_id: impl Into<PropertyValue>) -> Self {
        self.root_id = root_id.into();
        self
    }

    /// Set the record keys holding the id and the parent id
    pub fn with_keys(mut self, id_key: impl Into<String>, parent_key: impl Into<String>) -> Self {
        self.id_key = id_key.into();
        self.parent_key = parent_key.into();
        self
    }

    /// Set the missing-parent policy
    pub fn with_missing_parent(mut self, policy: MissingParentPolicy) -> Self {
        self.missing_parent = policy;
        self
    }
}

/// Builds a [`Tree`] out of flat records.
///
/// # Example
///
/// ```
/// use nodetree::{PropertyMap, Tree};
///
/// # fn example() -> nodetree::Result<()> {
/// let tree = Tree::from_records(vec![
///     PropertyMap::new().with("id", 1).with("parent", 0).with("title", "Docs"),
///     PropertyMap::new().with("id", 2).with("parent", 1).with("title", "Intro"),
/// ])?;
///
/// let intro = tree.node_by_id(2)?;
/// assert_eq!(intro.level(), 2);
/// assert_eq!(intro.parent().unwrap().get("title")?.to_string(), "Docs");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    options: BuildOptions,
}

impl TreeBuilder {
    /// Create a builder with the given options.
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// The builder's options.
    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build a tree from records.
    ///
    /// A synthetic root `{id: root_id, parent: null}` is inserted first.
    /// Records whose parent is the root id or null become its children.
    /// Each parent's children keep record order.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidRecord`] if a record lacks the id or parent key,
    ///   or has a null id
    /// - [`TreeError::DuplicateId`] if an id repeats (the root id included)
    /// - [`TreeError::InvalidParent`] if a record is its own parent, or its
    ///   parent does not exist under [`MissingParentPolicy::Error`]
    pub fn build(&self, records: impl IntoIterator<Item = PropertyMap>) -> Result<Tree> {
        let records: Vec<PropertyMap> = records.into_iter().collect();
        debug!("Building tree from {} records", records.len());

        let root_key = self.options.root_id.to_string();
        let mut tree = Tree::with_capacity(records.len() + 1);
        let root = tree.insert(Node::new(
            PropertyMap::new()
                .with(ID_KEY, self.options.root_id.clone())
                .with(PARENT_KEY, PropertyValue::Null),
        ));

        let mut by_id: HashMap<String, NodeIndex> = HashMap::with_capacity(records.len() + 1);
        by_id.insert(root_key.clone(), root);

        let mut pending = Vec::with_capacity(records.len());
        for (position, record) in records.into_iter().enumerate() {
            let record = self.normalize(record, position)?;
            let id = record.get(ID_KEY).map(ToString::to_string).unwrap_or_default();
            // A null or absent parent means top-level; only an explicit parent can be self
            let named_parent = match record.get(PARENT_KEY) {
                Some(PropertyValue::Null) | None => None,
                Some(value) => Some(value.to_string()),
            };

            if by_id.contains_key(&id) {
                return Err(TreeError::DuplicateId { node_id: id });
            }
            if named_parent.as_deref() == Some(id.as_str()) {
                return Err(TreeError::InvalidParent {
                    node_id: id.clone(),
                    parent_id: id,
                    message: "node references its own id as parent id".to_string(),
                });
            }
            let parent = named_parent.unwrap_or_else(|| root_key.clone());

            let index = tree.insert(Node::new(record));
            by_id.insert(id.clone(), index);
            pending.push((index, id, parent));
        }

        let mut children_of: HashMap<NodeIndex, Vec<NodeIndex>> = HashMap::new();
        for (index, id, parent) in pending {
            let parent_index = match by_id.get(&parent) {
                Some(parent_index) => *parent_index,
                None => match self.options.missing_parent {
                    MissingParentPolicy::Error => {
                        return Err(TreeError::InvalidParent {
                            node_id: id,
                            parent_id: parent,
                            message: "parent does not exist".to_string(),
                        });
                    }
                    MissingParentPolicy::AttachToRoot => {
                        warn!("Node {id} points to non-existent parent {parent}, attaching to root");
                        root
                    }
                    MissingParentPolicy::Skip => {
                        warn!("Node {id} points to non-existent parent {parent}, skipping");
                        continue;
                    }
                },
            };
            children_of.entry(parent_index).or_default().push(index);
        }

        let mut attached = 0usize;
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            if let Some(children) = children_of.remove(&parent) {
                for child in children {
                    tree.add_child(parent, child)?;
                    stack.push(child);
                    attached += 1;
                }
            }
        }

        let unreachable: usize = children_of.values().map(Vec::len).sum();
        if unreachable > 0 {
            warn!("{unreachable} records are not reachable from root {root_key} and stay detached");
        }

        debug!("Built tree: {} nodes, {attached} attached below root", tree.len());
        Ok(tree)
    }

    /// Parse records from a JSON array and build a tree from them.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Serialization`] for malformed JSON, plus every
    /// error of [`TreeBuilder::build`].
    pub fn build_from_json(&self, json: &str) -> Result<Tree> {
        self.build(records_from_json(json)?)
    }

    fn normalize(&self, mut record: PropertyMap, position: usize) -> Result<PropertyMap> {
        for (key, canonical) in [
            (self.options.id_key.as_str(), ID_KEY),
            (self.options.parent_key.as_str(), PARENT_KEY),
        ] {
            if !record.rename(key, canonical) {
                return Err(TreeError::invalid_record(format!(
                    "record {position} has no '{key}' property"
                )));
            }
        }

        if record.get(ID_KEY).is_some_and(PropertyValue::is_null) {
            return Err(TreeError::invalid_record(format!(
                "record {position} has a null id"
            )));
        }

        Ok(record)
    }
}

impl Tree {
    /// Build a tree from records with [`BuildOptions::default`].
    ///
    /// # Errors
    ///
    /// See [`TreeBuilder::build`].
    pub fn from_records(records: impl IntoIterator<Item = PropertyMap>) -> Result<Tree> {
        TreeBuilder::default().build(records)
    }
}

/// Parse a JSON array of flat objects into property records.
///
/// Values must be scalars (string, number, bool or null).
///
/// # Errors
///
/// Returns [`TreeError::Serialization`] if the input is not such an array.
pub fn records_from_json(json: &str) -> Result<Vec<PropertyMap>> {
    serde_json::from_str(json)
        .map_err(|e| TreeError::serialization("Failed to parse records", Some(e)))
}
