//! Core tree types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: a property bag plus parent/children links
//! - [`Tree`]: the arena that owns nodes and links them
//! - [`NodeRef`]: a borrowed view carrying every structural query

mod types;
mod property;
mod arena;
mod node_ref;
pub mod algorithms;

pub use types::{Node, NodeIndex, ID_KEY, PARENT_KEY};
pub use property::{PropertyMap, PropertyValue};
pub use arena::Tree;
pub use node_ref::NodeRef;
