//! Construction Port
//!
//! Rust has no implicit string to type construction, so class names are
//! resolved through a table supplied by the host.

use crate::error::BoxError;
use crate::value_objects::Element;

/// Builds instances of named classes
///
/// # Example
///
/// ```ignore
/// if constructor.has_class("Mailer") {
///     let mailer = constructor.construct("Mailer", vec![Element::from("smtp.example.org")])?;
/// }
/// ```
pub trait ClassConstructor: Send + Sync {
    /// Whether `class_name` can be constructed
    fn has_class(&self, class_name: &str) -> bool;

    /// Construct `class_name` with positional arguments
    fn construct(&self, class_name: &str, args: Vec<Element>) -> Result<Element, BoxError>;
}
