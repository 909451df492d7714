//! Unit tests for node construction, linking and property access.

use crate::fixtures::sample_tree;
use nodetree::{Node, PropertyMap, PropertyValue, Tree, TreeError};

#[test]
fn test_construct_lower_cases_keys() {
    let node = Node::from_pairs([
        ("ID", PropertyValue::Int(5)),
        ("Parent", PropertyValue::Int(0)),
        ("DisplayName", PropertyValue::from("Five")),
    ]);

    let keys: Vec<&str> = node.properties().keys().collect();
    assert_eq!(keys, vec!["id", "parent", "displayname"]);
    assert_eq!(node.id(), &PropertyValue::Int(5));
}

#[test]
fn test_get_variants_agree() {
    let tree = sample_tree();
    let node = tree.node_by_id(11).unwrap();

    let lower = node.get("id").unwrap();
    assert_eq!(node.get("ID").unwrap(), lower);
    assert_eq!(node.get("Id").unwrap(), lower);
    assert_eq!(node.get_id(), lower);
}

#[test]
fn test_get_missing_property() {
    let tree = sample_tree();
    let err = tree.node_by_id(21).unwrap().get("nonexistent").unwrap_err();

    assert!(matches!(
        &err,
        TreeError::MissingProperty { name, node_id } if name == "nonexistent" && node_id == "21"
    ));
    assert_eq!(err.to_string(), "Undefined property 'nonexistent' on node 21");
}

#[test]
fn test_get_id_without_id_is_null() {
    let mut tree = Tree::new();
    let index = tree.insert(Node::new(PropertyMap::new().with("name", "anonymous")));

    let node = tree.get(index).unwrap();
    assert!(node.get_id().is_null());
    assert_eq!(node.to_string(), "");
}

#[test]
fn test_accessor_sugar() {
    let tree = sample_tree();
    let node = tree.node_by_id(12).unwrap();

    assert_eq!(node.accessor("getName").unwrap(), &PropertyValue::from("A2"));
    assert_eq!(node.accessor("getParent").unwrap(), &PropertyValue::Int(1));

    let err = node.accessor("getColour").unwrap_err();
    assert_eq!(err.to_string(), "Invalid accessor getColour() called on node 12");
    assert!(matches!(node.accessor("name"), Err(TreeError::InvalidAccessor { .. })));
}

#[test]
fn test_add_child_syncs_parent_property() {
    let mut tree = Tree::new();
    let parent = tree.insert(Node::new(PropertyMap::new().with("id", "p").with("parent", 0)));
    let child = tree.insert(Node::new(PropertyMap::new().with("id", "c").with("parent", "stale")));

    tree.add_child(parent, child).unwrap();

    let child = tree.get(child).unwrap();
    let parent = tree.get(parent).unwrap();
    assert_eq!(child.parent(), Some(parent));
    assert_eq!(child.get("parent").unwrap(), parent.get_id());
    assert_eq!(parent.children(), vec![child]);
}

#[test]
fn test_add_child_preserves_call_order() {
    let mut tree = Tree::new();
    let root = tree.insert(Node::new(PropertyMap::new().with("id", 0)));
    let kids: Vec<_> = (1..=4)
        .map(|id| tree.insert(Node::new(PropertyMap::new().with("id", id))))
        .collect();
    for kid in kids.iter().rev() {
        tree.add_child(root, *kid).unwrap();
    }

    let order: Vec<String> = tree
        .get(root)
        .unwrap()
        .children()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(order, vec!["4", "3", "2", "1"]);
}

#[test]
fn test_children_parent_round_trip() {
    let tree = sample_tree();

    for node in tree.root().unwrap().descendants_and_self() {
        for child in node.children() {
            assert_eq!(child.parent(), Some(node));
        }
        if let Some(parent) = node.parent() {
            let hits = parent.children().into_iter().filter(|c| *c == node).count();
            assert_eq!(hits, 1);
        }
    }
}

#[test]
fn test_to_map_and_properties() {
    let tree = sample_tree();
    let node = tree.node_by_id(2).unwrap();

    let map = node.to_map();
    assert_eq!(&map, node.properties());
    assert_eq!(map.get_string("name"), Some("B"));
}

#[test]
fn test_root_has_no_parent() {
    let tree = sample_tree();
    let root = tree.root().unwrap();

    assert!(root.parent().is_none());
    assert_eq!(root.level(), 0);
    assert!(root.get("parent").unwrap().is_null());
}
