//! # Domain Layer
//!
//! Core types of the ioc container. This crate holds no resolution logic;
//! it defines the vocabulary the infrastructure engine works with.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Marker characters, reserved keys and definition field names |
//! | [`value_objects`] | Elements, element keys, argument expressions, element-map sources |
//! | [`ports`] | Construction and class-file capabilities supplied by the host |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{BoxError, Error, Result};
pub use ports::{ClassConstructor, ClassFileLoader};
pub use value_objects::{
    ArgumentExpression, Creator, DefinitionSource, Element, ElementKey, ElementMapSource,
    KeyTemplate, RawValue, Recipe,
};
