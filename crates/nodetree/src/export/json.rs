//! JSON export, flat or nested.
//!
//! The flat form is an array of property maps in pre-order and can be fed
//! straight back into [`records_from_json`](crate::builder::records_from_json).
//! The nested form mirrors the tree, each object carrying a `children` array.

use crate::{NodeIndex, NodeRef, PropertyMap, PropertyValue, Result, Tree, TreeError};
use log::debug;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Key holding the nested children in hierarchical output.
pub const CHILDREN_KEY: &str = "children";

/// Export every node below the root as a flat, pre-ordered JSON array.
///
/// # Errors
///
/// Returns [`TreeError::Serialization`] if a property cannot be represented
/// in JSON (a non-finite float) or rendering fails.
pub fn export_json_flat(tree: &Tree) -> Result<String> {
    let nodes = tree.nodes();
    debug!("Exporting {} nodes as flat JSON", nodes.len());

    let array = nodes
        .iter()
        .map(|node| properties_to_json(node.properties()))
        .collect::<Result<Vec<Value>>>()?;

    to_pretty(&Value::Array(array))
}

/// Export the tree as nested JSON, starting from the top-level nodes.
///
/// # Errors
///
/// Returns [`TreeError::Serialization`] under the same conditions as
/// [`subtree_to_json`], or if rendering fails.
pub fn export_json_hierarchical(tree: &Tree) -> Result<String> {
    debug!("Exporting tree of {} nodes as hierarchical JSON", tree.len());

    let array = tree
        .root_nodes()
        .into_iter()
        .map(subtree_to_json)
        .collect::<Result<Vec<Value>>>()?;
    to_pretty(&Value::Array(array))
}

/// Render the subtree below `node` (inclusive) as a nested JSON object.
///
/// Builds bottom-up from a pre-order list instead of recursing.
///
/// # Errors
///
/// Returns [`TreeError::Serialization`] if a node has its own `children`
/// property, which would collide with the nested array, or a non-finite
/// float property.
pub fn subtree_to_json(node: NodeRef<'_>) -> Result<Value> {
    let subtree = node.descendants_and_self();

    // Children are finished before their parent when walking pre-order backwards
    let mut rendered: HashMap<NodeIndex, Value> = HashMap::with_capacity(subtree.len());
    for current in subtree.iter().rev() {
        let children: Vec<Value> = current
            .children()
            .iter()
            .map(|child| rendered.remove(&child.index()).unwrap_or(Value::Null))
            .collect();

        if current.properties().contains_key(CHILDREN_KEY) {
            return Err(TreeError::serialization(
                format!(
                    "Node {current} has a '{CHILDREN_KEY}' property, which nested output reserves"
                ),
                None::<serde_json::Error>,
            ));
        }

        let mut object = properties_to_json(current.properties())?;
        if let Value::Object(map) = &mut object {
            map.insert(CHILDREN_KEY.to_string(), Value::Array(children));
        }
        rendered.insert(current.index(), object);
    }

    Ok(rendered.remove(&node.index()).unwrap_or(Value::Null))
}

/// Convert a PropertyMap to a JSON object, keeping key order.
///
/// # Errors
///
/// Returns [`TreeError::Serialization`] for NaN or infinite floats, which
/// JSON cannot carry.
pub fn properties_to_json(props: &PropertyMap) -> Result<Value> {
    let mut obj = serde_json::Map::new();

    for (key, value) in props.iter() {
        let json_value = match value {
            PropertyValue::String(s) => json!(s),
            PropertyValue::Int(i) => json!(i),
            PropertyValue::Float(f) if !f.is_finite() => {
                return Err(TreeError::serialization(
                    format!("Property '{key}' holds non-finite float {f}"),
                    None::<serde_json::Error>,
                ));
            }
            PropertyValue::Float(f) => json!(f),
            PropertyValue::Bool(b) => json!(b),
            PropertyValue::Null => Value::Null,
        };
        obj.insert(key.to_string(), json_value);
    }

    Ok(Value::Object(obj))
}

fn to_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| TreeError::serialization("Failed to render JSON", Some(e)))
}
