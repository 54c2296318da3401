//! # ioc
//!
//! A keyed dependency-injection container. Elements are registered under
//! dot-separated aliases in an element map and created lazily on first use.
//!
//! ## Features
//!
//! - **Qualified lookups**: `Mailer.eu` resolves through `Mailer` with qualifier `eu`
//! - **Shared and private elements**: memoized per container, or fresh on every call
//! - **Scoped submaps**: a definition can carry its own nested element map
//! - **Parent delegation**: child containers fall back to their parent
//!
//! ## Example
//!
//! ```ignore
//! use ioc::{ContainerBuilder, Element, ElementMapSource, Recipe};
//!
//! let map = ElementMapSource::new()
//!     .with("Greeting", Recipe::new().class("Text").args(["Hello ", "$"]));
//! let container = ContainerBuilder::new().with_element_map(map).build();
//!
//! let greeting = container.get_shared_element("Greeting.world")?;
//! assert_eq!(greeting.as_str(), Some("Hello world"));
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Element values, key and argument grammar, ports, errors
//! - `infrastructure` - Resolution engine, class registry, config, logging
//! - `cli` - The `ioc` command-line tool

pub mod cli;

/// Domain layer - element values, key grammar and error taxonomy
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use ioc_domain::*;
}

/// Infrastructure layer - resolution engine, configuration and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use ioc_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engine entry points at the crate root
pub use infrastructure::{ClassRegistry, Container, ContainerBuilder, ElementFactory, Locator};
