//! Error types for nodetree operations.
//!
//! Structural queries never fail. Errors come from property lookups, from
//! handles that do not belong to a tree, and from building or (de)serializing
//! a tree.

use thiserror::Error;

/// Result type alias for nodetree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Error type for all tree operations.
#[derive(Error, Debug)]
pub enum TreeError {
    /// A property lookup named a key the node does not carry
    #[error("Undefined property '{name}' on node {node_id}")]
    MissingProperty {
        /// Requested property name, as passed by the caller
        name: String,
        /// String form of the node's id
        node_id: String,
    },

    /// A `get<Name>` accessor did not resolve to a stored property
    #[error("Invalid accessor {name}() called on node {node_id}")]
    InvalidAccessor {
        /// Accessor name, as passed by the caller
        name: String,
        /// String form of the node's id
        node_id: String,
    },

    /// Node not found in the tree
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// Id or handle of the missing node
        node_id: String,
    },

    /// A record cannot be turned into a node
    #[error("Invalid record: {message}")]
    InvalidRecord {
        /// Description of what went wrong
        message: String,
    },

    /// Two records share the same id
    #[error("Duplicate node id: {node_id}")]
    DuplicateId {
        /// The repeated id
        node_id: String,
    },

    /// A record's parent reference cannot be resolved
    #[error("Node {node_id} has invalid parent {parent_id}: {message}")]
    InvalidParent {
        /// Id of the record being attached
        node_id: String,
        /// The parent id it references
        parent_id: String,
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TreeError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an invalid-record error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}
