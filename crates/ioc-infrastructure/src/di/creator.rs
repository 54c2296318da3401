//! Element Creator
//!
//! Creates one element from its definition:
//!
//! 1. include the class file, if any
//! 2. resolve the arguments in order
//! 3. construct the class, or else
//! 4. invoke the creator, or else
//! 5. fail: the definition names neither

use ioc_domain::error::{Error, Result};
use ioc_domain::Element;
use tracing::{debug, warn};

use crate::di::definition::ElementDefinition;
use crate::di::factory::FactoryServices;
use crate::di::resolver::ArgumentResolver;

/// Single-use creation of one definition
pub struct ElementCreator<'a> {
    definition: &'a ElementDefinition,
    resolver: &'a ArgumentResolver,
    services: &'a FactoryServices,
}

impl<'a> ElementCreator<'a> {
    /// Bind a definition to its argument resolver and host capabilities
    pub fn new(
        definition: &'a ElementDefinition,
        resolver: &'a ArgumentResolver,
        services: &'a FactoryServices,
    ) -> Self {
        Self {
            definition,
            resolver,
            services,
        }
    }

    /// Create the element
    pub fn create_element(&self) -> Result<Element> {
        let alias = self.definition.alias();

        if let Some(path) = self.definition.class_file()? {
            self.services.class_files.load(path).map_err(|e| {
                warn!(alias, path, error = %e, "Class file inclusion failed");
                Error::creation_failure_with_source(
                    alias,
                    format!("cannot load class file '{path}'"),
                    e,
                )
            })?;
        }

        let args = self
            .resolver
            .resolve_all(self.definition.argument_expressions())?;

        if let Some(class_name) = self.definition.class_name()? {
            if !self.services.classes.has_class(class_name) {
                warn!(alias, class = class_name, "Class is not registered");
                return Err(Error::creation_failure(
                    alias,
                    format!("class '{class_name}' is not registered"),
                ));
            }
            debug!(alias, class = class_name, args = args.len(), "Constructing class");
            return self
                .services
                .classes
                .construct(class_name, args)
                .map_err(|e| {
                    Error::from_capability(alias, format!("constructor of '{class_name}' failed"), e)
                });
        }

        if let Some(creator) = self.definition.creator()? {
            debug!(alias, args = args.len(), "Invoking creator");
            return creator
                .call(args)
                .map_err(|e| Error::from_capability(alias, "creator failed", e));
        }

        Err(Error::bad_definition(
            alias,
            "neither class nor creator specified",
        ))
    }
}
