//! Tests for element values

use std::sync::Arc;

use ioc_domain::{Creator, Element};
use serde_json::json;

#[derive(Debug)]
struct Mailer {
    host: String,
}

#[test]
fn test_data_accessors() {
    let element = Element::from("smtp.example.org");
    assert_eq!(element.as_str(), Some("smtp.example.org"));
    assert!(!element.is_instance());
    assert!(element.downcast::<Mailer>().is_none());

    assert!(Element::null().is_null());
    assert_eq!(Element::from(3_i64).as_value(), Some(&json!(3)));
}

#[test]
fn test_instance_downcast() {
    let element = Element::instance(Mailer {
        host: "localhost".to_string(),
    });
    let mailer = element.downcast::<Mailer>().expect("should hold a Mailer");
    assert_eq!(mailer.host, "localhost");
    assert!(element.downcast::<String>().is_none());
    assert!(element.as_value().is_none());
}

#[test]
fn test_same_as_uses_identity_for_instances() {
    let shared = Arc::new(Mailer {
        host: "a".to_string(),
    });
    let first = Element::from_arc(Arc::clone(&shared));
    let second = first.clone();
    let other = Element::instance(Mailer {
        host: "a".to_string(),
    });

    assert!(first.same_as(&second));
    assert!(!first.same_as(&other));
    assert!(Element::from("x").same_as(&Element::from("x")));
    assert!(!Element::from("x").same_as(&first));
}

#[test]
fn test_creator_receives_positional_arguments() {
    let creator = Creator::new(|args| Ok(Element::from(args.len() as i64)));
    let result = creator
        .call(vec![Element::from("a"), Element::null()])
        .expect("creator should succeed");
    assert_eq!(result.as_value(), Some(&json!(2)));
}

#[test]
fn test_debug_hides_instances() {
    let element = Element::instance(Mailer {
        host: "h".to_string(),
    });
    assert_eq!(format!("{element:?}"), "Instance(..)");
}
