//! Argument Expressions
//!
//! Constructor and creator arguments are written in a tiny grammar:
//!
//! | Expression | Meaning |
//! |------------|---------|
//! | `$` | the qualifier of the element being created |
//! | `@key` | shared element `key` |
//! | `#key` | freshly created private element `key` |
//! | anything else | passed through unchanged |
//!
//! In `@key.$` and `#key.$` the trailing `.$` forwards the current qualifier.

use std::fmt;

use serde_json::Value;

use crate::constants::{
    PRIVATE_REFERENCE_MARKER, QUALIFIER_FORWARD_SUFFIX, QUALIFIER_MARKER, SHARED_REFERENCE_MARKER,
};
use crate::value_objects::element::Element;
use crate::value_objects::map_source::RawValue;

/// A parsed argument expression
#[derive(Debug, Clone)]
pub enum ArgumentExpression {
    /// Passed through unchanged
    Literal(Element),
    /// The current element qualifier
    Qualifier,
    /// Shared lookup of the rendered key
    SharedRef(KeyTemplate),
    /// Private creation of the rendered key
    PrivateRef(KeyTemplate),
}

impl ArgumentExpression {
    /// Parse a raw definition value
    pub fn parse(raw: RawValue) -> Self {
        let parsed = raw.as_str().and_then(Self::parse_str);
        parsed.unwrap_or_else(|| Self::Literal(raw.into_element()))
    }

    /// Parse a string expression; `None` for plain literals
    pub fn parse_str(text: &str) -> Option<Self> {
        if text == QUALIFIER_MARKER {
            return Some(Self::Qualifier);
        }
        let mut chars = text.chars();
        let marker = chars.next()?;
        let template = chars.as_str();
        if template.is_empty() {
            return None;
        }
        match marker {
            SHARED_REFERENCE_MARKER => Some(Self::SharedRef(KeyTemplate::parse(template))),
            PRIVATE_REFERENCE_MARKER => Some(Self::PrivateRef(KeyTemplate::parse(template))),
            _ => None,
        }
    }

    /// Whether evaluating this expression touches a container
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::SharedRef(_) | Self::PrivateRef(_))
    }
}

impl fmt::Display for ArgumentExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(Element::Value(Value::String(text))) => f.write_str(text),
            Self::Literal(Element::Value(value)) => write!(f, "{value}"),
            Self::Literal(Element::Instance(_)) => f.write_str("<instance>"),
            Self::Qualifier => f.write_str(QUALIFIER_MARKER),
            Self::SharedRef(template) => write!(f, "{SHARED_REFERENCE_MARKER}{template}"),
            Self::PrivateRef(template) => write!(f, "{PRIVATE_REFERENCE_MARKER}{template}"),
        }
    }
}

impl From<&str> for ArgumentExpression {
    fn from(text: &str) -> Self {
        Self::parse_str(text)
            .unwrap_or_else(|| Self::Literal(Element::Value(Value::String(text.to_string()))))
    }
}

/// Referenced key, optionally ending in a qualifier slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTemplate {
    base: String,
    forwards_qualifier: bool,
}

impl KeyTemplate {
    /// Parse the text following a reference marker
    pub fn parse(template: &str) -> Self {
        match template.strip_suffix(QUALIFIER_FORWARD_SUFFIX) {
            Some(base) => Self {
                base: base.to_string(),
                forwards_qualifier: true,
            },
            None => Self {
                base: template.to_string(),
                forwards_qualifier: false,
            },
        }
    }

    /// Key without the qualifier slot
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether the key ends in `.$`
    pub fn forwards_qualifier(&self) -> bool {
        self.forwards_qualifier
    }

    /// Concrete key for the given qualifier
    ///
    /// A `null` qualifier drops the slot together with its separator.
    pub fn render(&self, qualifier: Option<&str>) -> String {
        match (self.forwards_qualifier, qualifier) {
            (true, Some(qualifier)) => format!("{}.{}", self.base, qualifier),
            _ => self.base.clone(),
        }
    }
}

impl fmt::Display for KeyTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.forwards_qualifier {
            write!(f, "{}{}", self.base, QUALIFIER_FORWARD_SUFFIX)
        } else {
            f.write_str(&self.base)
        }
    }
}
