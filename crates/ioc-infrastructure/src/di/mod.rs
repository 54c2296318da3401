//! Element Resolution Engine
//!
//! String keys in, constructed elements out.
//!
//! ## Architecture Overview
//!
//! ```text
//! Container ──miss──▶ ElementFactory ──▶ ElementCreator ──▶ ClassConstructor
//!     ▲                    │                   │
//!     │                    │ submap            ▼
//!     │                    ▼            ArgumentResolver
//!     │              child Container           │
//!     └──────────── @key / #key ◀──────────────┘
//! ```
//!
//! | Module | Role |
//! |--------|------|
//! | [`container`] | Shared-element store and parent delegation |
//! | [`factory`] | Element map, longest-alias matching, submap scopes |
//! | [`definition`] | Lazily validated construction recipes |
//! | [`resolver`] | Argument expression evaluation |
//! | [`creator`] | Creation of one element from its definition |
//! | [`locator`] | Read-only view of one scope |
//! | [`registry`] | Class-name to constructor table (runtime + linkme) |
//! | [`class_file`] | Class-file inclusion adapters |
//! | [`cycle`] | Cyclic dependency detection |
//! | [`bootstrap`] | Container assembly from code or configuration |

pub mod bootstrap;
mod builtin;
pub mod class_file;
pub mod container;
pub mod creator;
pub mod cycle;
pub mod definition;
pub mod factory;
pub mod locator;
pub mod registry;
pub mod resolver;

pub use bootstrap::{ContainerBuilder, init_container};
pub use class_file::{FilesystemClassFileLoader, NoopClassFileLoader};
pub use container::Container;
pub use creator::ElementCreator;
pub use definition::ElementDefinition;
pub use factory::{ElementFactory, FactoryServices};
pub use locator::Locator;
pub use registry::{CLASSES, ClassEntry, ClassRegistry, list_classes};
pub use resolver::ArgumentResolver;
