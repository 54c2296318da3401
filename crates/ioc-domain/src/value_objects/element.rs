//! Element Values
//!
//! Everything a container hands out is an [`Element`]: either plain data
//! (numbers, strings, JSON structures, `null`) or an opaque host instance
//! shared behind an `Arc`.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::BoxError;

/// Value Object: a resolved element
///
/// Cloning an element is cheap: data is cloned, instances share their `Arc`.
///
/// ## Example
///
/// ```rust
/// use ioc_domain::Element;
///
/// struct Mailer;
///
/// let data = Element::from("smtp.example.org");
/// assert_eq!(data.as_str(), Some("smtp.example.org"));
///
/// let instance = Element::instance(Mailer);
/// assert!(instance.downcast::<Mailer>().is_some());
/// ```
#[derive(Clone)]
pub enum Element {
    /// Plain data, including `null`
    Value(Value),
    /// Opaque host instance
    Instance(Arc<dyn Any + Send + Sync>),
}

impl Element {
    /// The `null` element
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    /// Wrap a host value as a shared instance
    pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
        Self::Instance(Arc::new(value))
    }

    /// Wrap an already shared host value without re-allocating
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self::Instance(value)
    }

    /// Data payload, if this is a data element
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Instance(_) => None,
        }
    }

    /// String payload, if this is a string data element
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    /// Whether this is the `null` data element
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Whether this element is an opaque instance
    pub fn is_instance(&self) -> bool {
        matches!(self, Self::Instance(_))
    }

    /// Typed handle on the instance, if it holds a `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match self {
            Self::Instance(instance) => Arc::clone(instance).downcast::<T>().ok(),
            Self::Value(_) => None,
        }
    }

    /// Identity for instances, equality for data
    pub fn same_as(&self, other: &Element) -> bool {
        match (self, other) {
            (Self::Instance(left), Self::Instance(right)) => {
                std::ptr::addr_eq(Arc::as_ptr(left), Arc::as_ptr(right))
            }
            (Self::Value(left), Self::Value(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Instance(_) => f.write_str("Instance(..)"),
        }
    }
}

impl From<Value> for Element {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_string()))
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

type CreatorFn = dyn Fn(Vec<Element>) -> Result<Element, BoxError> + Send + Sync;

/// Creator function of an element definition
///
/// Invoked with the resolved arguments in order; the result need not be an
/// instance.
#[derive(Clone)]
pub struct Creator(Arc<CreatorFn>);

impl Creator {
    /// Wrap a closure as a creator
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Vec<Element>) -> Result<Element, BoxError> + Send + Sync + 'static,
    {
        Self(Arc::new(function))
    }

    /// Invoke the creator with positional arguments
    pub fn call(&self, args: Vec<Element>) -> Result<Element, BoxError> {
        (self.0)(args)
    }
}

impl fmt::Debug for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Creator(..)")
    }
}
