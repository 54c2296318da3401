//! Element Definitions
//!
//! Normalized recipe for one alias. Normalization never fails: string
//! shorthand is expanded and argument expressions are parsed up front, while
//! the type of every other facet is checked only when it is read.

use ioc_domain::constants::{FIELD_ARGS, FIELD_CLASS, FIELD_CREATOR, FIELD_FILE, FIELD_SUBMAP};
use ioc_domain::error::{Error, Result};
use ioc_domain::value_objects::json_kind;
use ioc_domain::{ArgumentExpression, Creator, DefinitionSource, ElementMapSource, RawValue};
use serde_json::Value;

/// Construction recipe for one element alias
#[derive(Debug, Clone)]
pub struct ElementDefinition {
    alias: String,
    class_file: Option<RawValue>,
    class_name: Option<RawValue>,
    creator: Option<RawValue>,
    arguments: Vec<ArgumentExpression>,
    submap: Option<RawValue>,
}

impl ElementDefinition {
    /// Normalize a raw definition registered under `alias`
    pub fn new(alias: impl Into<String>, source: DefinitionSource) -> Self {
        let alias = alias.into();
        match source {
            DefinitionSource::ClassName(class_name) => Self {
                alias,
                class_file: None,
                class_name: Some(RawValue::from(class_name)),
                creator: None,
                arguments: Vec::new(),
                submap: None,
            },
            DefinitionSource::Fields(mut fields) => {
                let present = |value: Option<RawValue>| value.filter(|raw| !raw.is_null());
                Self {
                    class_file: present(fields.remove(FIELD_FILE)),
                    class_name: present(fields.remove(FIELD_CLASS)),
                    creator: present(fields.remove(FIELD_CREATOR)),
                    arguments: present(fields.remove(FIELD_ARGS))
                        .map(parse_arguments)
                        .unwrap_or_default(),
                    submap: present(fields.remove(FIELD_SUBMAP)),
                    alias,
                }
            }
            DefinitionSource::Malformed(_) => Self {
                alias,
                class_file: None,
                class_name: None,
                creator: None,
                arguments: Vec::new(),
                submap: None,
            },
        }
    }

    /// Alias this definition is registered under
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Class file to include before construction
    pub fn class_file(&self) -> Result<Option<&str>> {
        self.string_facet(self.class_file.as_ref(), "class file")
    }

    /// Class to construct
    pub fn class_name(&self) -> Result<Option<&str>> {
        self.string_facet(self.class_name.as_ref(), "class name")
    }

    /// Creator function to invoke
    pub fn creator(&self) -> Result<Option<&Creator>> {
        match &self.creator {
            None => Ok(None),
            Some(RawValue::Creator(creator)) => Ok(Some(creator)),
            Some(other) => Err(Error::bad_definition(
                &self.alias,
                format!("creator must be invocable, found {}", raw_kind(other)),
            )),
        }
    }

    /// Parsed argument expressions, in order
    pub fn argument_expressions(&self) -> &[ArgumentExpression] {
        &self.arguments
    }

    /// Nested element map, if one is declared
    pub fn submap_source(&self) -> Result<Option<ElementMapSource>> {
        match &self.submap {
            None => Ok(None),
            Some(RawValue::Submap(submap)) => Ok(Some(submap.clone())),
            Some(RawValue::Data(value @ Value::Object(_))) => {
                ElementMapSource::from_json(value.clone()).map(Some)
            }
            Some(other) => Err(Error::bad_definition(
                &self.alias,
                format!("submap must be a mapping, found {}", raw_kind(other)),
            )),
        }
    }

    fn string_facet<'a>(&self, raw: Option<&'a RawValue>, facet: &str) -> Result<Option<&'a str>> {
        match raw {
            None => Ok(None),
            Some(raw) => raw.as_str().map(Some).ok_or_else(|| {
                Error::bad_definition(
                    &self.alias,
                    format!("{facet} must be a string, found {}", raw_kind(raw)),
                )
            }),
        }
    }
}

/// Sequences become one expression per item; anything else is a single expression
fn parse_arguments(raw: RawValue) -> Vec<ArgumentExpression> {
    match raw {
        RawValue::List(items) => items.into_iter().map(ArgumentExpression::parse).collect(),
        RawValue::Data(Value::Array(items)) => items
            .into_iter()
            .map(|item| ArgumentExpression::parse(RawValue::Data(item)))
            .collect(),
        scalar => vec![ArgumentExpression::parse(scalar)],
    }
}

fn raw_kind(raw: &RawValue) -> &'static str {
    match raw {
        RawValue::Data(value) => json_kind(value),
        RawValue::Literal(element) => match element.as_value() {
            Some(value) => json_kind(value),
            None => "an instance",
        },
        RawValue::Creator(_) => "a creator",
        RawValue::Submap(_) => "a submap",
        RawValue::List(_) => "a list",
    }
}
