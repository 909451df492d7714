//! Unit tests for JSON export.

use crate::fixtures::sample_tree;
use nodetree::export::{export_json_flat, export_json_hierarchical};
use nodetree::{records_from_json, PropertyMap, Tree, TreeError};
use serde_json::Value;

#[test]
fn test_flat_export_is_pre_order() {
    let tree = sample_tree();
    let json: Value = serde_json::from_str(&export_json_flat(&tree).unwrap()).unwrap();

    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|node| node["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 11, 12, 2, 21, 3]);
    assert_eq!(json[1]["parent"], 1);
    assert_eq!(json[1]["name"], "A1");
}

#[test]
fn test_flat_export_keeps_key_order() {
    let tree = sample_tree();
    let rendered = export_json_flat(&tree).unwrap();

    let id = rendered.find("\"id\"").unwrap();
    let parent = rendered.find("\"parent\"").unwrap();
    let name = rendered.find("\"name\"").unwrap();
    assert!(id < parent && parent < name);
}

#[test]
fn test_flat_export_rebuilds_same_tree() {
    let tree = sample_tree();
    let rebuilt = Tree::from_records(records_from_json(&export_json_flat(&tree).unwrap()).unwrap())
        .unwrap();

    let original: Vec<_> = tree.nodes().iter().map(|n| n.to_map()).collect();
    let copy: Vec<_> = rebuilt.nodes().iter().map(|n| n.to_map()).collect();
    assert_eq!(original, copy);
}

#[test]
fn test_hierarchical_export() {
    let tree = sample_tree();
    let json: Value = serde_json::from_str(&export_json_hierarchical(&tree).unwrap()).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["name"], "A");
    assert_eq!(json[0]["children"][1]["name"], "A2");
    assert_eq!(json[1]["children"][0]["name"], "B1");
    assert_eq!(json[2]["children"], serde_json::json!([]));
}

#[test]
fn test_export_empty_tree() {
    let tree = Tree::new();
    assert_eq!(export_json_flat(&tree).unwrap(), "[]");
    assert_eq!(export_json_hierarchical(&tree).unwrap(), "[]");
}

#[test]
fn test_flat_export_refuses_nan_instead_of_losing_it() {
    let tree = Tree::from_records(vec![
        PropertyMap::new().with("id", 1).with("parent", 0).with("score", f64::NAN),
    ])
    .unwrap();

    let err = export_json_flat(&tree).unwrap_err();
    assert!(matches!(err, TreeError::Serialization { .. }));
    assert!(err.to_string().contains("non-finite"));
}

#[test]
fn test_finite_floats_survive_flat_round_trip() {
    let tree = Tree::from_records(vec![
        PropertyMap::new().with("id", 1).with("parent", 0).with("score", 0.25),
    ])
    .unwrap();

    let rebuilt = Tree::from_records(records_from_json(&export_json_flat(&tree).unwrap()).unwrap())
        .unwrap();
    assert_eq!(rebuilt.node_by_id(1).unwrap().properties().get_float("score"), Some(0.25));
}

#[test]
fn test_hierarchical_export_refuses_children_property() {
    let tree = Tree::from_records(vec![
        PropertyMap::new().with("id", 1).with("parent", 0).with("children", 3),
    ])
    .unwrap();

    assert!(matches!(
        export_json_hierarchical(&tree),
        Err(TreeError::Serialization { .. })
    ));
    // The flat layout has no reserved key
    let flat: Value = serde_json::from_str(&export_json_flat(&tree).unwrap()).unwrap();
    assert_eq!(flat[0]["children"], 3);
}
