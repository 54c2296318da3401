//! Tests for raw element-map sources

use ioc_domain::{DefinitionSource, Element, ElementMapSource, RawValue, Recipe};
use serde_json::json;

#[test]
fn test_from_json_reads_shorthand_and_tables() {
    let map = ElementMapSource::from_json(json!({
        "Bar": "Bar",
        "Foo": { "class": "Foo", "args": ["@Bar"] },
        "Odd": 7
    }))
    .expect("object should parse");

    assert_eq!(map.len(), 3);
    assert!(matches!(map.get("Bar"), Some(DefinitionSource::ClassName(name)) if name == "Bar"));
    match map.get("Foo") {
        Some(DefinitionSource::Fields(fields)) => {
            assert_eq!(fields.get("class").and_then(RawValue::as_str), Some("Foo"));
            assert!(fields.contains_key("args"));
        }
        other => panic!("Expected fields, got {other:?}"),
    }
    assert!(matches!(map.get("Odd"), Some(DefinitionSource::Malformed(_))));
}

#[test]
fn test_from_json_rejects_non_objects() {
    assert!(ElementMapSource::from_json(json!(["Foo"])).is_err());
}

#[test]
fn test_last_insert_wins() {
    let map = ElementMapSource::new().with("Foo", "First").with("Foo", "Second");
    assert_eq!(map.len(), 1);
    assert!(matches!(map.get("Foo"), Some(DefinitionSource::ClassName(name)) if name == "Second"));
}

#[test]
fn test_recipe_builder_sets_fields() {
    let definition: DefinitionSource = Recipe::new()
        .class("Foo")
        .file("classes/foo.rs")
        .args(["@Bar", "$"])
        .submap(ElementMapSource::new().with("Bar", "Bar"))
        .into();

    match definition {
        DefinitionSource::Fields(fields) => {
            let names: Vec<&str> = fields.keys().map(String::as_str).collect();
            assert_eq!(names, vec!["args", "class", "file", "submap"]);
        }
        other => panic!("Expected fields, got {other:?}"),
    }
}

#[test]
fn test_null_raw_values_count_as_absent() {
    assert!(RawValue::Data(json!(null)).is_null());
    assert!(RawValue::Literal(Element::null()).is_null());
    assert!(!RawValue::from("x").is_null());
}

#[test]
fn test_iter_is_alias_ordered() {
    let map = ElementMapSource::new().with("b", "B").with("a", "A");
    let aliases: Vec<&str> = map.iter().map(|(alias, _)| alias).collect();
    assert_eq!(aliases, vec!["a", "b"]);
}

#[test]
fn test_data_list_becomes_json_array() {
    let built = RawValue::List(vec![RawValue::from("a"), RawValue::from(1_i64), RawValue::Data(json!(null))])
        .into_element();
    let loaded = RawValue::Data(json!(["a", 1, null])).into_element();

    assert_eq!(built.as_value(), Some(&json!(["a", 1, null])));
    assert_eq!(built.as_value(), loaded.as_value());
}

#[test]
fn test_nested_data_lists_stay_data() {
    let nested = RawValue::List(vec![RawValue::List(vec![RawValue::from("x")]), RawValue::from(true)])
        .into_element();

    assert_eq!(nested.as_value(), Some(&json!([["x"], true])));
}

#[test]
fn test_list_with_instances_stays_opaque() {
    let mixed = RawValue::List(vec![RawValue::from("a"), RawValue::Literal(Element::instance(5_u8))])
        .into_element();

    assert!(mixed.is_instance());
    let items = mixed.downcast::<Vec<Element>>().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].as_str(), Some("a"));
}
