//! # nodetree
//!
//! An ordered, in-memory tree built from flat property records: rows that
//! carry an `id` and a `parent` reference.
//!
//! ## Core Principles
//!
//! - **Read-mostly**: build once, then navigate as often as needed
//! - **No ownership cycles**: nodes live in an arena, parents are handles
//! - **No recursion**: every walk uses an explicit stack or a loop
//! - **Zero Magic**: property access is a plain, case-insensitive lookup
//!
//! ## Architecture
//!
//! ```text
//! Records (JSON, rows, hand-built maps)
//!     ↓
//! TreeBuilder (id/parent resolution)
//!     ↓
//! Tree arena (insert, add_child)
//!     ↓
//! NodeRef queries (children, siblings, descendants, ancestors, level)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nodetree::{PropertyMap, Tree};
//!
//! # fn main() -> nodetree::Result<()> {
//! let tree = Tree::from_records(vec![
//!     PropertyMap::new().with("id", 1).with("parent", 0).with("name", "Europe"),
//!     PropertyMap::new().with("id", 2).with("parent", 1).with("name", "France"),
//!     PropertyMap::new().with("id", 3).with("parent", 1).with("name", "Spain"),
//! ])?;
//!
//! let france = tree.node_by_id(2)?;
//! assert_eq!(france.following_sibling().unwrap().get("Name")?.to_string(), "Spain");
//! assert_eq!(france.ancestors().len(), 2); // Europe and the synthetic root
//! # Ok(())
//! # }
//! ```
//!
//! The parent/child graph must be acyclic. The builder never links a cycle;
//! callers linking nodes by hand with [`Tree::add_child`] are responsible
//! for it, and walks over a cycle do not terminate.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builder;
pub mod error;
pub mod export;
pub mod tree;

// Re-export main types
pub use builder::{records_from_json, BuildOptions, MissingParentPolicy, TreeBuilder};
pub use error::{Result, TreeError};
pub use tree::{Node, NodeIndex, NodeRef, PropertyMap, PropertyValue, Tree};
