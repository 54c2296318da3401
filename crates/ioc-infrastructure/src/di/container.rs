//! Element Container
//!
//! Owns the shared-element store of one scope and the delegation chain to
//! its parent scope.
//!
//! ```text
//! get_shared_element("Mailer.eu")
//!        │
//!        ▼
//! ┌──────────────────────┐  hit   ┌──────────────┐
//! │ shared store (local) │───────▶│   element    │
//! └──────────────────────┘        └──────────────┘
//!        │ miss                           ▲
//!        ▼                                │ memoize
//! ┌──────────────────────┐  can create    │
//! │ attached factory     │────────────────┘
//! └──────────────────────┘
//!        │ unknown locally
//!        ▼
//! parent.get_shared_element("Mailer.eu")  ──▶ UnknownElement at the root
//! ```
//!
//! Creation never holds a store lock: the store is checked, the element is
//! built (possibly recursing into this container), then inserted. If another
//! thread won the race the stored value is returned instead.

use std::fmt;
use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::{ArcSwapAny, ArcSwapOption};
use dashmap::DashMap;
use ioc_domain::constants::CONTAINER_KEY;
use ioc_domain::error::{Error, Result};
use ioc_domain::Element;
use tracing::{debug, trace};

use crate::di::factory::ElementFactory;

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Scope of shared elements with optional factory and parent
pub struct Container {
    id: u64,
    shared: DashMap<String, Element>,
    factory: ArcSwapOption<ElementFactory>,
    parent: ArcSwapAny<Weak<Container>>,
}

impl Container {
    /// Create a root container with no factory
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            id: NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed),
            shared: DashMap::new(),
            factory: ArcSwapOption::empty(),
            parent: ArcSwapAny::new(Weak::new()),
        })
    }

    /// Process-unique identifier, used in logs and the cycle guard
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Attach the factory consulted for creation, replacing any previous one
    pub fn set_factory(&self, factory: Arc<ElementFactory>) {
        self.factory.store(Some(factory));
    }

    /// The attached factory
    pub fn factory(&self) -> Option<Arc<ElementFactory>> {
        self.factory.load_full()
    }

    /// Delegate unresolved lookups to `parent`
    ///
    /// Only a weak link is kept: the child never keeps its parent alive.
    pub fn set_parent_container(&self, parent: &Arc<Container>) {
        self.parent.store(Arc::downgrade(parent));
    }

    /// The delegation target, if any and still alive
    pub fn parent_container(&self) -> Option<Arc<Container>> {
        self.parent.load_full().upgrade()
    }

    /// New empty container delegating to this one
    pub fn create_child_container(self: &Arc<Self>) -> Arc<Container> {
        let child = Container::new();
        child.set_parent_container(self);
        trace!(parent = self.id, child = child.id, "Created child container");
        child
    }

    /// Store `value` under `key`, overwriting what was there
    pub fn set_shared_element(&self, key: impl Into<String>, value: Element) {
        self.shared.insert(key.into(), value);
    }

    /// Shared element from this scope or, failing that, from the parent chain
    pub fn get_shared_element(self: &Arc<Self>, key: &str) -> Result<Element> {
        if let Some(element) = self.find_local_element(key)? {
            return Ok(element);
        }
        match self.parent_container() {
            Some(parent) => {
                trace!(container = self.id, parent = parent.id, key, "Delegating shared lookup");
                parent.get_shared_element(key)
            }
            None => Err(Error::unknown_element(key)),
        }
    }

    /// Shared element from this scope only
    pub fn get_shared_local_element(self: &Arc<Self>, key: &str) -> Result<Element> {
        self.find_local_element(key)?
            .ok_or_else(|| Error::unknown_element(key))
    }

    /// Fresh element that is never stored
    ///
    /// Uses the local factory when it knows the key, otherwise the parent's.
    pub fn create_private_element(self: &Arc<Self>, key: &str) -> Result<Element> {
        if let Some(factory) = self.creating_factory(key) {
            trace!(container = self.id, key, "Creating private element");
            return factory.create_element(key);
        }
        match self.parent_container() {
            Some(parent) => parent.create_private_element(key),
            None => Err(Error::unknown_element(key)),
        }
    }

    /// Whether `key` is stored here or the local factory can create it
    pub fn is_element_known_locally(&self, key: &str) -> bool {
        self.shared.contains_key(key) || key == CONTAINER_KEY || self.creating_factory(key).is_some()
    }

    /// Whether `key` is known here or anywhere up the parent chain
    pub fn is_element_known(&self, key: &str) -> bool {
        if self.is_element_known_locally(key) {
            return true;
        }
        let mut ancestor = self.parent_container();
        while let Some(container) = ancestor {
            if container.is_element_known_locally(key) {
                return true;
            }
            ancestor = container.parent_container();
        }
        false
    }

    /// Keys currently memoized in this scope, sorted
    pub fn shared_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.shared.iter().map(|entry| entry.key().clone()).collect();
        keys.sort_unstable();
        keys
    }

    fn find_local_element(self: &Arc<Self>, key: &str) -> Result<Option<Element>> {
        let stored = self.shared.get(key).map(|entry| entry.value().clone());
        if stored.is_some() {
            return Ok(stored);
        }
        if key == CONTAINER_KEY {
            return Ok(Some(Element::from_arc(Arc::clone(self))));
        }
        let Some(factory) = self.creating_factory(key) else {
            return Ok(None);
        };
        let created = factory.create_element(key)?;
        let element = self
            .shared
            .entry(key.to_string())
            .or_insert(created)
            .value()
            .clone();
        debug!(container = self.id, key, "Memoized shared element");
        Ok(Some(element))
    }

    fn creating_factory(&self, key: &str) -> Option<Arc<ElementFactory>> {
        self.factory()
            .filter(|factory| factory.can_create_element(key))
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("id", &self.id)
            .field("shared", &self.shared_keys())
            .field("has_factory", &self.factory().is_some())
            .field("parent", &self.parent_container().map(|parent| parent.id))
            .finish()
    }
}
