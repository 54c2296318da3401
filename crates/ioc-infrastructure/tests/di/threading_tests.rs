//! Containers shared between threads

use std::sync::Arc;
use std::thread;

use ioc_domain::{Element, ElementMapSource, Recipe};

use crate::test_utils::test_container;

#[test]
fn test_concurrent_lookups_agree_on_one_instance() {
    let map = ElementMapSource::new()
        .with("Foo", Recipe::new().class("Foo").args(["@Bar"]))
        .with("Bar", "Bar");
    let (container, _) = test_container(map);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let container = Arc::clone(&container);
            thread::spawn(move || container.get_shared_element("Foo").unwrap())
        })
        .collect();
    let elements: Vec<Element> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let stored = container.get_shared_element("Foo").unwrap();
    for element in &elements {
        assert!(element.same_as(&stored));
    }
}

#[test]
fn test_cycle_guard_is_per_thread() {
    let map = ElementMapSource::new()
        .with("Slow", Recipe::new().class("Probe").args(["@Bar"]))
        .with("Bar", "Bar");
    let (container, _) = test_container(map);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let container = Arc::clone(&container);
            thread::spawn(move || container.create_private_element("Slow").is_ok())
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
