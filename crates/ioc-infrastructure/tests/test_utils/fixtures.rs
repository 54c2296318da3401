//! Host classes used as elements in tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ioc_domain::{BoxError, Element, ElementMapSource};
use ioc_infrastructure::di::{ClassRegistry, ContainerBuilder, NoopClassFileLoader};
use ioc_infrastructure::Container;

/// Leaf dependency
#[derive(Debug)]
pub struct Bar {
    pub serial: usize,
}

/// Depends on a `Bar`
#[derive(Debug)]
pub struct Foo {
    pub bar: Arc<Bar>,
}

/// Records its raw arguments
#[derive(Debug)]
pub struct Probe {
    pub args: Vec<Element>,
}

/// Construction counters per class
#[derive(Debug, Default)]
pub struct Counters {
    pub bar: AtomicUsize,
    pub foo: AtomicUsize,
    pub probe: AtomicUsize,
}

impl Counters {
    pub fn bar(&self) -> usize {
        self.bar.load(Ordering::SeqCst)
    }

    pub fn foo(&self) -> usize {
        self.foo.load(Ordering::SeqCst)
    }

    pub fn probe(&self) -> usize {
        self.probe.load(Ordering::SeqCst)
    }
}

/// Registry knowing `Bar`, `Foo` and `Probe`, plus its counters
pub fn test_registry() -> (Arc<ClassRegistry>, Arc<Counters>) {
    let counters = Arc::new(Counters::default());
    let registry = ClassRegistry::isolated();

    let bar_counter = Arc::clone(&counters);
    registry.register("Bar", move |_args| {
        let serial = bar_counter.bar.fetch_add(1, Ordering::SeqCst);
        Ok(Element::instance(Bar { serial }))
    });

    let foo_counter = Arc::clone(&counters);
    registry.register("Foo", move |args| {
        foo_counter.foo.fetch_add(1, Ordering::SeqCst);
        let bar = args
            .first()
            .and_then(|arg| arg.downcast::<Bar>())
            .ok_or_else(|| BoxError::from("Foo expects a Bar"))?;
        Ok(Element::instance(Foo { bar }))
    });

    let probe_counter = Arc::clone(&counters);
    registry.register("Probe", move |args| {
        probe_counter.probe.fetch_add(1, Ordering::SeqCst);
        Ok(Element::instance(Probe { args }))
    });

    (Arc::new(registry), counters)
}

/// Container over `element_map` using [`test_registry`]
pub fn test_container(element_map: ElementMapSource) -> (Arc<Container>, Arc<Counters>) {
    let (registry, counters) = test_registry();
    let container = ContainerBuilder::new()
        .with_element_map(element_map)
        .with_classes(registry)
        .with_class_files(Arc::new(NoopClassFileLoader))
        .build();
    (container, counters)
}

/// Arguments a `Probe` element was constructed with
pub fn probe_args(element: &Element) -> Vec<Element> {
    element
        .downcast::<Probe>()
        .map(|probe| probe.args.clone())
        .unwrap_or_default()
}
