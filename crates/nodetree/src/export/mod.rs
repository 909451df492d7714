//! Export module for handing trees to other tools.
//!
//! Supports two JSON layouts:
//! - **Flat**: pre-ordered array of property maps, re-importable as records
//! - **Hierarchical**: nested objects with a `children` array

pub mod json;

pub use json::{export_json_flat, export_json_hierarchical, subtree_to_json};
