//! Element Factory
//!
//! Owns the element map of one container and turns keys into elements.
//!
//! ## Longest-alias matching
//!
//! `"Mailer.smtp.eu"` is tried as `Mailer.smtp.eu`, then `Mailer.smtp`, then
//! `Mailer`. The first registered alias wins and the rest of the key becomes
//! the qualifier, so an explicitly registered `Mailer.smtp` always beats
//! `Mailer` qualified by `smtp`.
//!
//! ## Submaps
//!
//! A definition carrying a non-empty submap gets a child container of its
//! own for argument resolution. The child sees the submap first and the
//! factory's container through delegation.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use arc_swap::ArcSwap;
use ioc_domain::error::{Error, Result};
use ioc_domain::{ClassConstructor, ClassFileLoader, Element, ElementKey, ElementMapSource};
use tracing::debug;

use crate::di::class_file::FilesystemClassFileLoader;
use crate::di::container::Container;
use crate::di::creator::ElementCreator;
use crate::di::cycle::ResolutionGuard;
use crate::di::definition::ElementDefinition;
use crate::di::registry::ClassRegistry;
use crate::di::resolver::ArgumentResolver;

type ElementMap = HashMap<String, Arc<ElementDefinition>>;

/// Host capabilities shared by a factory and the child factories it spawns
#[derive(Clone)]
pub struct FactoryServices {
    /// Construction-by-name capability
    pub classes: Arc<dyn ClassConstructor>,
    /// Class-file inclusion capability
    pub class_files: Arc<dyn ClassFileLoader>,
    /// Fail with `CyclicDependency` instead of recursing forever
    pub detect_cycles: bool,
}

impl FactoryServices {
    /// Services with cycle detection enabled
    pub fn new(classes: Arc<dyn ClassConstructor>, class_files: Arc<dyn ClassFileLoader>) -> Self {
        Self {
            classes,
            class_files,
            detect_cycles: true,
        }
    }

    /// Toggle cycle detection
    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }
}

impl Default for FactoryServices {
    fn default() -> Self {
        Self::new(
            Arc::new(ClassRegistry::new()),
            Arc::new(FilesystemClassFileLoader::new()),
        )
    }
}

impl fmt::Debug for FactoryServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryServices")
            .field("detect_cycles", &self.detect_cycles)
            .finish_non_exhaustive()
    }
}

/// Element map plus the recipe to create any key it matches
pub struct ElementFactory {
    container: Weak<Container>,
    element_map: ArcSwap<ElementMap>,
    services: FactoryServices,
}

impl ElementFactory {
    /// Create a factory serving `container`, without attaching it
    pub fn new(container: &Arc<Container>, services: FactoryServices) -> Arc<Self> {
        Arc::new(Self {
            container: Arc::downgrade(container),
            element_map: ArcSwap::from_pointee(ElementMap::new()),
            services,
        })
    }

    /// Create a factory and attach it to `container`
    pub fn attach(container: &Arc<Container>, services: FactoryServices) -> Arc<Self> {
        let factory = Self::new(container, services);
        container.set_factory(Arc::clone(&factory));
        factory
    }

    /// Capabilities used for creation
    pub fn services(&self) -> &FactoryServices {
        &self.services
    }

    /// Replace the element map
    ///
    /// Elements already shared in the container are kept.
    pub fn set_element_map(&self, source: ElementMapSource) {
        let element_map: ElementMap = source
            .into_iter()
            .map(|(alias, definition)| {
                let definition = Arc::new(ElementDefinition::new(alias.clone(), definition));
                (alias, definition)
            })
            .collect();
        debug!(aliases = element_map.len(), "Element map loaded");
        self.element_map.store(Arc::new(element_map));
    }

    /// Registered aliases, sorted
    pub fn aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self.element_map.load().keys().cloned().collect();
        aliases.sort_unstable();
        aliases
    }

    /// Definition registered under exactly `alias`
    pub fn definition(&self, alias: &str) -> Option<Arc<ElementDefinition>> {
        self.element_map.load().get(alias).cloned()
    }

    /// Longest registered alias that `key` starts with, on part boundaries
    pub fn find_longest_matching_alias(&self, key: &str) -> Option<String> {
        self.explain(key)
            .map(|(element_key, _)| element_key.alias().to_string())
    }

    /// How `key` would be created, without creating it
    pub fn explain(&self, key: &str) -> Option<(ElementKey, Arc<ElementDefinition>)> {
        let element_map = self.element_map.load_full();
        let element_key = ElementKey::resolve(key, |alias| element_map.contains_key(alias))?;
        let definition = element_map.get(element_key.alias()).cloned()?;
        Some((element_key, definition))
    }

    /// Whether some registered alias matches `key`
    pub fn can_create_element(&self, key: &str) -> bool {
        self.explain(key).is_some()
    }

    /// Create the element for `key`
    pub fn create_element(&self, key: &str) -> Result<Element> {
        let (element_key, definition) = self
            .explain(key)
            .ok_or_else(|| Error::unknown_element(key))?;
        let container = self.container.upgrade().ok_or_else(|| {
            Error::creation_failure(element_key.alias(), "owning container has been dropped")
        })?;

        let _guard = if self.services.detect_cycles {
            Some(ResolutionGuard::enter(container.id(), key)?)
        } else {
            None
        };
        debug!(
            container = container.id(),
            key,
            alias = element_key.alias(),
            qualifier = ?element_key.qualifier(),
            "Creating element"
        );

        let scope = match definition.submap_source()? {
            Some(submap) if !submap.is_empty() => self.spawn_submap_scope(&container, submap),
            _ => Arc::clone(&container),
        };
        // `container` stays alive for the whole creation, so a submap scope
        // can always reach it through its weak parent link
        let resolver = ArgumentResolver::new(scope, element_key.qualifier());
        ElementCreator::new(&definition, &resolver, &self.services).create_element()
    }

    fn spawn_submap_scope(&self, container: &Arc<Container>, submap: ElementMapSource) -> Arc<Container> {
        let child = container.create_child_container();
        let child_factory = ElementFactory::attach(&child, self.services.clone());
        debug!(parent = container.id(), child = child.id(), aliases = submap.len(), "Spawned submap scope");
        child_factory.set_element_map(submap);
        child
    }
}

impl fmt::Debug for ElementFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementFactory")
            .field("aliases", &self.aliases())
            .field("services", &self.services)
            .finish()
    }
}
