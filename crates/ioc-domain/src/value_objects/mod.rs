//! Domain Value Objects
//!
//! Immutable values the container engine is built from.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Element`] | A resolved element: data or an opaque instance |
//! | [`Creator`] | Creator function of a definition |
//! | [`ElementKey`] | A lookup key split into alias and qualifier |
//! | [`ArgumentExpression`] | Parsed constructor argument |
//! | [`ElementMapSource`] | Raw alias to definition mapping |

/// Parsed argument expressions
pub mod argument;
/// Element values and creator functions
pub mod element;
/// Element key grammar
pub mod element_key;
/// Raw element-map sources
pub mod map_source;

pub use argument::{ArgumentExpression, KeyTemplate};
pub use element::{Creator, Element};
pub use element_key::{AliasCandidates, ElementKey, alias_candidates, qualifier_of};
pub use map_source::{DefinitionSource, ElementMapSource, RawValue, Recipe, json_kind};
