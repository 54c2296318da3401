//! Tests for argument expression evaluation

use ioc_domain::{ArgumentExpression, Element, ElementMapSource, Error};
use ioc_infrastructure::di::ArgumentResolver;
use serde_json::json;

use crate::test_utils::{Bar, test_container};

#[test]
fn test_qualifier_marker() {
    let (container, _) = test_container(ElementMapSource::new());

    let qualified = ArgumentResolver::new(container.clone(), Some("eu"));
    let bare = ArgumentResolver::new(container, None);

    assert_eq!(qualified.resolve(&ArgumentExpression::Qualifier).unwrap().as_str(), Some("eu"));
    assert!(bare.resolve(&ArgumentExpression::Qualifier).unwrap().is_null());
}

#[test]
fn test_shared_reference_is_memoized() {
    let (container, counters) = test_container(ElementMapSource::new().with("Bar", "Bar"));
    let resolver = ArgumentResolver::new(container.clone(), None);

    let first = resolver.resolve(&ArgumentExpression::from("@Bar")).unwrap();
    let second = resolver.resolve(&ArgumentExpression::from("@Bar")).unwrap();

    assert!(first.same_as(&second));
    assert_eq!(counters.bar(), 1);
    assert!(first.downcast::<Bar>().is_some());
}

#[test]
fn test_private_reference_is_fresh() {
    let (container, counters) = test_container(ElementMapSource::new().with("Bar", "Bar"));
    let resolver = ArgumentResolver::new(container.clone(), None);

    let first = resolver.resolve(&ArgumentExpression::from("#Bar")).unwrap();
    let second = resolver.resolve(&ArgumentExpression::from("#Bar")).unwrap();

    assert!(!first.same_as(&second));
    assert_eq!(counters.bar(), 2);
    assert!(container.shared_keys().is_empty());
}

#[test]
fn test_forwarded_qualifier_in_references() {
    let (container, _) = test_container(ElementMapSource::new().with("Bar", "Bar"));
    let resolver = ArgumentResolver::new(container.clone(), Some("eu"));

    resolver.resolve(&ArgumentExpression::from("@Bar.$")).unwrap();

    assert_eq!(container.shared_keys(), vec!["Bar.eu".to_string()]);
}

#[test]
fn test_literals_pass_through() {
    let (container, _) = test_container(ElementMapSource::new());
    let resolver = ArgumentResolver::new(container, Some("eu"));

    let expressions = [
        ArgumentExpression::from("plain"),
        ArgumentExpression::Literal(Element::from(json!({ "k": 1 }))),
        ArgumentExpression::from("#"),
    ];
    let resolved = resolver.resolve_all(&expressions).unwrap();

    assert_eq!(resolved[0].as_str(), Some("plain"));
    assert_eq!(resolved[1].as_value(), Some(&json!({ "k": 1 })));
    assert_eq!(resolved[2].as_str(), Some("#"));
}

#[test]
fn test_resolve_all_stops_at_first_failure() {
    let (container, counters) = test_container(ElementMapSource::new().with("Bar", "Bar"));
    let resolver = ArgumentResolver::new(container, None);

    let expressions = [
        ArgumentExpression::from("@Missing"),
        ArgumentExpression::from("@Bar"),
    ];

    assert!(matches!(
        resolver.resolve_all(&expressions),
        Err(Error::UnknownElement { .. })
    ));
    assert_eq!(counters.bar(), 0);
}

#[test]
fn test_accessors() {
    let (container, _) = test_container(ElementMapSource::new());
    let resolver = ArgumentResolver::new(container.clone(), Some("q"));

    assert_eq!(resolver.qualifier(), Some("q"));
    assert_eq!(resolver.container().id(), container.id());
}
