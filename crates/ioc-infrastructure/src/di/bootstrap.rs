//! Container Bootstrap
//!
//! Assembles a container, its factory and the host capabilities in one
//! place, either programmatically through [`ContainerBuilder`] or from
//! application configuration through [`init_container`].
//!
//! ## Example
//!
//! ```ignore
//! let classes = ClassRegistry::new().with("Mailer", |args| Ok(Element::instance(Mailer::new(args))));
//! let container = ContainerBuilder::new()
//!     .with_element_map(element_map)
//!     .with_classes(Arc::new(classes))
//!     .build();
//! let mailer = container.get_shared_element("Mailer")?;
//! ```

use std::sync::Arc;

use ioc_domain::error::Result;
use ioc_domain::{ClassConstructor, ClassFileLoader, Element, ElementMapSource};
use tracing::info;

use crate::config::element_map::load_element_map;
use crate::config::AppConfig;
use crate::di::class_file::FilesystemClassFileLoader;
use crate::di::container::Container;
use crate::di::factory::{ElementFactory, FactoryServices};
use crate::di::registry::ClassRegistry;

/// Builder for a container with an attached factory
#[derive(Default)]
pub struct ContainerBuilder {
    element_map: ElementMapSource,
    classes: Option<Arc<dyn ClassConstructor>>,
    class_files: Option<Arc<dyn ClassFileLoader>>,
    detect_cycles: Option<bool>,
    parent: Option<Arc<Container>>,
    shared: Vec<(String, Element)>,
}

impl ContainerBuilder {
    /// Start with an empty element map and default capabilities
    pub fn new() -> Self {
        Self::default()
    }

    /// Element map loaded into the factory
    pub fn with_element_map(mut self, element_map: ElementMapSource) -> Self {
        self.element_map = element_map;
        self
    }

    /// Construction capability (default: [`ClassRegistry::new`])
    pub fn with_classes(mut self, classes: Arc<dyn ClassConstructor>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Class-file capability (default: [`FilesystemClassFileLoader::new`])
    pub fn with_class_files(mut self, class_files: Arc<dyn ClassFileLoader>) -> Self {
        self.class_files = Some(class_files);
        self
    }

    /// Toggle cycle detection (default: enabled)
    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = Some(enabled);
        self
    }

    /// Delegate unresolved lookups to `parent`
    ///
    /// The caller keeps `parent` alive; the built container only links to it.
    pub fn with_parent(mut self, parent: Arc<Container>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Pre-populate a shared element
    pub fn with_shared_element(mut self, key: impl Into<String>, value: Element) -> Self {
        self.shared.push((key.into(), value));
        self
    }

    /// Build the container and attach its factory
    pub fn build(self) -> Arc<Container> {
        let services = FactoryServices::new(
            self.classes
                .unwrap_or_else(|| Arc::new(ClassRegistry::new())),
            self.class_files
                .unwrap_or_else(|| Arc::new(FilesystemClassFileLoader::new())),
        )
        .with_cycle_detection(self.detect_cycles.unwrap_or(true));

        let container = Container::new();
        if let Some(parent) = self.parent {
            container.set_parent_container(&parent);
        }
        for (key, value) in self.shared {
            container.set_shared_element(key, value);
        }
        ElementFactory::attach(&container, services).set_element_map(self.element_map);
        container
    }
}

/// Build the root container described by configuration
///
/// Loads the configured element-map file, if any, and resolves relative
/// class-file paths against the configured root.
pub fn init_container(config: &AppConfig) -> Result<Arc<Container>> {
    let element_map = match &config.container.element_map {
        Some(path) => load_element_map(path)?,
        None => ElementMapSource::new(),
    };
    let class_files = match &config.container.class_file_root {
        Some(root) => FilesystemClassFileLoader::with_root(root),
        None => FilesystemClassFileLoader::new(),
    };

    let container = ContainerBuilder::new()
        .with_element_map(element_map)
        .with_class_files(Arc::new(class_files))
        .with_cycle_detection(config.container.detect_cycles)
        .build();

    info!(
        container = container.id(),
        aliases = container.factory().map(|f| f.aliases().len()).unwrap_or_default(),
        detect_cycles = config.container.detect_cycles,
        "Container initialized"
    );
    Ok(container)
}
