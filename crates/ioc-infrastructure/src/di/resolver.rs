//! Argument Resolver
//!
//! Evaluates argument expressions against one container and the qualifier
//! of the element being created.
//!
//! ```text
//! "$"          → qualifier (or null)
//! "@Logger.$"  → container.get_shared_element("Logger.<qualifier>")
//! "#Conn"      → container.create_private_element("Conn")
//! 42           → 42
//! ```

use std::sync::Arc;

use ioc_domain::error::Result;
use ioc_domain::{ArgumentExpression, Element};

use crate::di::container::Container;

/// Argument evaluation context for one creation
#[derive(Debug, Clone)]
pub struct ArgumentResolver {
    container: Arc<Container>,
    qualifier: Option<String>,
}

impl ArgumentResolver {
    /// Bind a container and qualifier
    pub fn new(container: Arc<Container>, qualifier: Option<&str>) -> Self {
        Self {
            container,
            qualifier: qualifier.map(str::to_string),
        }
    }

    /// Container references are resolved against
    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    /// Qualifier of the element being created
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Concrete value of one expression
    pub fn resolve(&self, expression: &ArgumentExpression) -> Result<Element> {
        match expression {
            ArgumentExpression::Qualifier => Ok(self
                .qualifier
                .as_deref()
                .map_or_else(Element::null, Element::from)),
            ArgumentExpression::SharedRef(template) => self
                .container
                .get_shared_element(&template.render(self.qualifier())),
            ArgumentExpression::PrivateRef(template) => self
                .container
                .create_private_element(&template.render(self.qualifier())),
            ArgumentExpression::Literal(element) => Ok(element.clone()),
        }
    }

    /// Resolve expressions in order, stopping at the first failure
    pub fn resolve_all(&self, expressions: &[ArgumentExpression]) -> Result<Vec<Element>> {
        expressions
            .iter()
            .map(|expression| self.resolve(expression))
            .collect()
    }
}
