//! Element-Map Sources
//!
//! The raw, unvalidated form of an element map as supplied by the caller or
//! read from a file. Shapes are only checked when a definition facet is used,
//! so a malformed entry costs nothing until something asks for it.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::constants::{FIELD_ARGS, FIELD_CLASS, FIELD_CREATOR, FIELD_FILE, FIELD_SUBMAP};
use crate::error::{BoxError, Error, Result};
use crate::value_objects::element::{Creator, Element};

/// A raw definition field value
#[derive(Debug, Clone)]
pub enum RawValue {
    /// Data as found in a configuration file
    Data(Value),
    /// A host value passed through literally
    Literal(Element),
    /// A creator function
    Creator(Creator),
    /// A nested element map
    Submap(ElementMapSource),
    /// A sequence of raw values
    List(Vec<RawValue>),
}

impl RawValue {
    /// String payload of data values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Data(value) => value.as_str(),
            Self::Literal(element) => element.as_str(),
            _ => None,
        }
    }

    /// JSON `null` counts as an absent field
    pub fn is_null(&self) -> bool {
        match self {
            Self::Data(value) => value.is_null(),
            Self::Literal(element) => element.is_null(),
            _ => false,
        }
    }

    /// Convert into the element passed to a constructor
    ///
    /// Lists holding only data become a JSON array, like the same list read
    /// from a file.
    pub fn into_element(self) -> Element {
        match self {
            Self::Data(value) => Element::Value(value),
            Self::Literal(element) => element,
            Self::Creator(creator) => Element::instance(creator),
            Self::Submap(submap) => Element::instance(submap),
            Self::List(items) => {
                let elements: Vec<Element> = items.into_iter().map(Self::into_element).collect();
                if elements.iter().all(|element| element.as_value().is_some()) {
                    let values = elements
                        .into_iter()
                        .filter_map(|element| match element {
                            Element::Value(value) => Some(value),
                            Element::Instance(_) => None,
                        })
                        .collect();
                    Element::Value(Value::Array(values))
                } else {
                    Element::instance(elements)
                }
            }
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Data(Value::String(value.to_string()))
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Data(Value::String(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Data(Value::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Data(Value::Bool(value))
    }
}

impl From<Element> for RawValue {
    fn from(element: Element) -> Self {
        Self::Literal(element)
    }
}

impl From<Creator> for RawValue {
    fn from(creator: Creator) -> Self {
        Self::Creator(creator)
    }
}

impl From<ElementMapSource> for RawValue {
    fn from(submap: ElementMapSource) -> Self {
        Self::Submap(submap)
    }
}

/// One entry of an element-map source
#[derive(Debug, Clone)]
pub enum DefinitionSource {
    /// Bare string: shorthand for `{ class: <name> }`
    ClassName(String),
    /// Table of definition fields
    Fields(BTreeMap<String, RawValue>),
    /// Anything else found in a data source
    Malformed(Value),
}

impl DefinitionSource {
    /// Interpret a data value as a definition
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(class_name) => Self::ClassName(class_name),
            Value::Object(fields) => Self::Fields(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, RawValue::Data(value)))
                    .collect(),
            ),
            other => Self::Malformed(other),
        }
    }
}

impl From<&str> for DefinitionSource {
    fn from(class_name: &str) -> Self {
        Self::ClassName(class_name.to_string())
    }
}

impl From<String> for DefinitionSource {
    fn from(class_name: String) -> Self {
        Self::ClassName(class_name)
    }
}

impl From<Recipe> for DefinitionSource {
    fn from(recipe: Recipe) -> Self {
        Self::Fields(recipe.fields)
    }
}

/// Builder for a table definition
///
/// ## Example
///
/// ```rust
/// use ioc_domain::{Element, ElementMapSource, Recipe};
///
/// let map = ElementMapSource::new()
///     .with("Greeting", Recipe::new().args(["Hello", "$"]).creator(|args| {
///         let words: Vec<&str> = args.iter().filter_map(Element::as_str).collect();
///         Ok(Element::from(words.join(", ")))
///     }));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Recipe {
    fields: BTreeMap<String, RawValue>,
}

impl Recipe {
    /// Start an empty definition
    pub fn new() -> Self {
        Self::default()
    }

    /// Class to construct
    pub fn class(self, class_name: impl Into<String>) -> Self {
        self.field(FIELD_CLASS, RawValue::from(class_name.into()))
    }

    /// Creator function to invoke
    pub fn creator<F>(self, function: F) -> Self
    where
        F: Fn(Vec<Element>) -> std::result::Result<Element, BoxError> + Send + Sync + 'static,
    {
        self.field(FIELD_CREATOR, RawValue::Creator(Creator::new(function)))
    }

    /// Class file to include before construction
    pub fn file(self, path: impl Into<String>) -> Self {
        self.field(FIELD_FILE, RawValue::from(path.into()))
    }

    /// Ordered argument expressions
    pub fn args<I, V>(self, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<RawValue>,
    {
        let items = args.into_iter().map(Into::into).collect();
        self.field(FIELD_ARGS, RawValue::List(items))
    }

    /// A single argument expression given without a sequence
    pub fn arg(self, arg: impl Into<RawValue>) -> Self {
        self.field(FIELD_ARGS, arg.into())
    }

    /// Nested element map for this definition's own dependencies
    pub fn submap(self, submap: ElementMapSource) -> Self {
        self.field(FIELD_SUBMAP, RawValue::Submap(submap))
    }

    /// Set any field verbatim
    pub fn field(mut self, name: impl Into<String>, value: RawValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }
}

/// Alias to definition-source mapping
///
/// Inserting an alias twice keeps the last definition.
#[derive(Debug, Clone, Default)]
pub struct ElementMapSource {
    entries: BTreeMap<String, DefinitionSource>,
}

impl ElementMapSource {
    /// Create an empty map source
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, alias: impl Into<String>, definition: impl Into<DefinitionSource>) -> Self {
        self.insert(alias, definition);
        self
    }

    /// Insert or replace the definition for an alias
    pub fn insert(&mut self, alias: impl Into<String>, definition: impl Into<DefinitionSource>) {
        self.entries.insert(alias.into(), definition.into());
    }

    /// Definition source registered for an alias
    pub fn get(&self, alias: &str) -> Option<&DefinitionSource> {
        self.entries.get(alias)
    }

    /// Number of aliases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map defines nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in alias order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DefinitionSource)> {
        self.entries
            .iter()
            .map(|(alias, definition)| (alias.as_str(), definition))
    }

    /// Read a map from a JSON object
    ///
    /// Only the top level must be an object; entries are checked lazily.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self {
                entries: entries
                    .into_iter()
                    .map(|(alias, value)| (alias, DefinitionSource::from_json(value)))
                    .collect(),
            }),
            other => Err(Error::configuration(format!(
                "Element map must be an object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

impl IntoIterator for ElementMapSource {
    type Item = (String, DefinitionSource);
    type IntoIter = std::collections::btree_map::IntoIter<String, DefinitionSource>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Human readable name of a JSON value kind
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
