//! Class Registry
//!
//! Resolves class names to constructors. Two sources are consulted:
//!
//! ```text
//! ClassRegistry::register("Mailer", |args| ...)   ← runtime, shadows linked
//!                    │
//!                    ▼
//! #[linkme::distributed_slice(CLASSES)]            ← compile time
//! static MAILER: ClassEntry = ClassEntry { .. };
//! ```
//!
//! ## Registering a class at compile time
//!
//! ```ignore
//! use ioc_infrastructure::di::registry::{ClassEntry, CLASSES};
//!
//! #[linkme::distributed_slice(CLASSES)]
//! static MAILER_CLASS: ClassEntry = ClassEntry {
//!     name: "Mailer",
//!     description: "SMTP mailer",
//!     constructor: |args| Ok(Element::instance(Mailer::new(args)?)),
//! };
//! ```

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use ioc_domain::{BoxError, ClassConstructor, Element};
use tracing::debug;

/// Constructor signature of a linked class
pub type ClassConstructorFn = fn(Vec<Element>) -> Result<Element, BoxError>;

type RuntimeConstructor = Arc<dyn Fn(Vec<Element>) -> Result<Element, BoxError> + Send + Sync>;

/// Registry entry for a class linked at compile time
pub struct ClassEntry {
    /// Class name used in element maps
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Constructor invoked with the resolved arguments
    pub constructor: ClassConstructorFn,
}

// Auto-collection via linkme distributed slices - classes submit entries at compile time
#[linkme::distributed_slice]
pub static CLASSES: [ClassEntry] = [..];

/// Find a linked class by name
pub fn find_linked_class(name: &str) -> Option<&'static ClassEntry> {
    CLASSES.iter().find(|entry| entry.name == name)
}

/// List all linked classes
///
/// # Returns
/// Vector of tuples containing (name, description) for each class
pub fn list_classes() -> Vec<(&'static str, &'static str)> {
    let mut classes: Vec<_> = CLASSES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    classes.sort_unstable();
    classes
}

/// Name to constructor table backing the `class` facet of definitions
pub struct ClassRegistry {
    runtime: DashMap<String, RuntimeConstructor>,
    include_linked: bool,
}

impl ClassRegistry {
    /// Registry consulting runtime registrations, then linked classes
    pub fn new() -> Self {
        Self {
            runtime: DashMap::new(),
            include_linked: true,
        }
    }

    /// Registry consulting runtime registrations only
    pub fn isolated() -> Self {
        Self {
            runtime: DashMap::new(),
            include_linked: false,
        }
    }

    /// Register or replace a constructor
    pub fn register<F>(&self, name: impl Into<String>, constructor: F)
    where
        F: Fn(Vec<Element>) -> Result<Element, BoxError> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(class = %name, "Registering class constructor");
        self.runtime.insert(name, Arc::new(constructor));
    }

    /// Builder-style [`register`](Self::register)
    pub fn with<F>(self, name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(Vec<Element>) -> Result<Element, BoxError> + Send + Sync + 'static,
    {
        self.register(name, constructor);
        self
    }

    /// Names registered at runtime, sorted
    pub fn runtime_classes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.runtime.iter().map(|entry| entry.key().clone()).collect();
        names.sort_unstable();
        names
    }

    fn linked(&self, name: &str) -> Option<&'static ClassEntry> {
        if self.include_linked {
            find_linked_class(name)
        } else {
            None
        }
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassRegistry")
            .field("runtime", &self.runtime_classes())
            .field("include_linked", &self.include_linked)
            .finish()
    }
}

impl ClassConstructor for ClassRegistry {
    fn has_class(&self, class_name: &str) -> bool {
        self.runtime.contains_key(class_name) || self.linked(class_name).is_some()
    }

    fn construct(&self, class_name: &str, args: Vec<Element>) -> Result<Element, BoxError> {
        // Clone out of the shard so constructors may touch the registry
        let runtime = self
            .runtime
            .get(class_name)
            .map(|entry| Arc::clone(entry.value()));
        if let Some(constructor) = runtime {
            return constructor(args);
        }
        match self.linked(class_name) {
            Some(entry) => (entry.constructor)(args),
            None => Err(format!("class '{class_name}' is not registered").into()),
        }
    }
}
