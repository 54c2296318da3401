//! # Infrastructure Layer
//!
//! The resolution engine of the ioc container and the cross-cutting
//! concerns around it.
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Containers, factories, definitions, argument resolution |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based settings and element-map files |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use di::{ClassRegistry, Container, ContainerBuilder, ElementFactory, Locator};
pub use error_ext::ErrorContext;
