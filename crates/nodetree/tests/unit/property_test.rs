//! Unit tests for `PropertyMap` and `PropertyValue`.

use nodetree::{PropertyMap, PropertyValue};

#[test]
fn test_property_map_builder() {
    let props = PropertyMap::new()
        .with("name", "test")
        .with("count", 42)
        .with("enabled", true)
        .with("score", 3.15);

    assert_eq!(props.get_string("name"), Some("test"));
    assert_eq!(props.get_int("count"), Some(42));
    assert_eq!(props.get_bool("enabled"), Some(true));
    assert_eq!(props.get_float("score"), Some(3.15));
}

#[test]
fn test_property_map_is_case_insensitive() {
    let mut props = PropertyMap::new().with("Title", "Home");

    assert!(props.contains_key("TITLE"));
    assert_eq!(props.get("title"), props.get("tItLe"));

    props.insert("TITLE", "About");
    assert_eq!(props.len(), 1);
    assert_eq!(props.get_string("title"), Some("About"));
}

#[test]
fn test_property_map_keeps_insertion_order() {
    let props: PropertyMap = vec![("zeta", 1), ("Alpha", 2), ("mid", 3)].into_iter().collect();

    assert_eq!(props.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_property_map_insert_and_remove() {
    let mut props = PropertyMap::new();

    props.insert("key1", "value1");
    assert!(props.contains_key("key1"));
    assert_eq!(props.len(), 1);

    assert_eq!(props.remove("KEY1"), Some(PropertyValue::from("value1")));
    assert!(!props.contains_key("key1"));
    assert!(props.is_empty());
}

#[test]
fn test_string_forms_used_for_ids() {
    assert_eq!(PropertyValue::Int(3).to_string(), PropertyValue::from("3").to_string());
    assert_eq!(PropertyValue::Float(1.5).to_string(), "1.5");
    assert_eq!(PropertyValue::Bool(true).to_string(), "true");
}
