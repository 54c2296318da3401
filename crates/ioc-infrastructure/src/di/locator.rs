//! Read-only locator over one container scope

use std::sync::Arc;

use ioc_domain::error::Result;
use ioc_domain::Element;

use crate::di::container::Container;

/// Consumer-facing view of a container
///
/// Only the container's own scope is visible; the parent chain is never
/// consulted and nothing can be written.
#[derive(Debug, Clone)]
pub struct Locator {
    container: Arc<Container>,
}

impl Locator {
    /// Wrap a container
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    /// Whether `key` is known in the local scope
    pub fn has(&self, key: &str) -> bool {
        self.container.is_element_known_locally(key)
    }

    /// Shared element from the local scope
    pub fn get(&self, key: &str) -> Result<Element> {
        self.container.get_shared_local_element(key)
    }
}
