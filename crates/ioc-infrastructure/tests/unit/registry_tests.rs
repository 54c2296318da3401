//! Tests for the class registry and linked classes

use std::sync::Arc;

use ioc_domain::{BoxError, ClassConstructor, Element, ElementMapSource, Recipe};
use ioc_infrastructure::di::registry::{CLASSES, ClassEntry, find_linked_class};
use ioc_infrastructure::di::{ClassRegistry, ContainerBuilder, list_classes};
use serde_json::json;

fn construct_greeter(args: Vec<Element>) -> Result<Element, BoxError> {
    let name = args.first().and_then(Element::as_str).unwrap_or("nobody");
    Ok(Element::from(format!("hello {name}")))
}

#[linkme::distributed_slice(CLASSES)]
static GREETER_CLASS: ClassEntry = ClassEntry {
    name: "TestGreeter",
    description: "Greets its first argument",
    constructor: construct_greeter,
};

#[test]
fn test_runtime_registration() {
    let registry = ClassRegistry::isolated();
    assert!(!registry.has_class("Widget"));

    registry.register("Widget", |_| Ok(Element::from("widget")));

    assert!(registry.has_class("Widget"));
    assert_eq!(registry.runtime_classes(), vec!["Widget".to_string()]);
    let widget = registry.construct("Widget", Vec::new()).unwrap();
    assert_eq!(widget.as_str(), Some("widget"));
}

#[test]
fn test_unknown_class_fails_construction() {
    let registry = ClassRegistry::isolated();

    let error = registry.construct("Nope", Vec::new()).unwrap_err();

    assert!(error.to_string().contains("Nope"));
}

#[test]
fn test_linked_classes_are_listed() {
    let classes = list_classes();
    let names: Vec<&str> = classes.iter().map(|(name, _)| *name).collect();

    assert!(names.contains(&"Array"));
    assert!(names.contains(&"Text"));
    assert!(names.contains(&"TestGreeter"));
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert!(find_linked_class("TestGreeter").is_some());
}

#[test]
fn test_isolated_registry_ignores_linked_classes() {
    let linked = ClassRegistry::new();
    let isolated = ClassRegistry::isolated();

    assert!(linked.has_class("TestGreeter"));
    assert!(!isolated.has_class("TestGreeter"));
    assert!(!isolated.has_class("Array"));
}

#[test]
fn test_runtime_registration_shadows_linked() {
    let registry = ClassRegistry::new().with("TestGreeter", |_| Ok(Element::from("shadowed")));

    let element = registry.construct("TestGreeter", vec![Element::from("x")]).unwrap();

    assert_eq!(element.as_str(), Some("shadowed"));
}

#[test]
fn test_builtin_classes_in_element_map() {
    let map = ElementMapSource::new()
        .with("Hosts", Recipe::new().class("Array").args(["a.example", "$"]))
        .with("Banner", Recipe::new().class("Text").args(["v", "$"]))
        .with("Greeting", Recipe::new().class("TestGreeter").arg("world"));
    let container = ContainerBuilder::new()
        .with_element_map(map)
        .with_classes(Arc::new(ClassRegistry::new()))
        .build();

    let hosts = container.get_shared_element("Hosts.b").unwrap();
    let banner = container.get_shared_element("Banner.2").unwrap();
    let greeting = container.get_shared_element("Greeting").unwrap();

    assert_eq!(hosts.as_value(), Some(&json!(["a.example", "b"])));
    assert_eq!(banner.as_str(), Some("v2"));
    assert_eq!(greeting.as_str(), Some("hello world"));
}

#[test]
fn test_builtin_text_rejects_instances() {
    let registry = ClassRegistry::new();

    let result = registry.construct("Text", vec![Element::instance(5_u8)]);

    assert!(result.is_err());
}
