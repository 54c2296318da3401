//! Built-in classes
//!
//! Data-only classes that make file-based element maps usable without any
//! host registrations.

use ioc_domain::{BoxError, Element};
use serde_json::Value;

use crate::di::registry::{CLASSES, ClassEntry};

#[linkme::distributed_slice(CLASSES)]
static ARRAY_CLASS: ClassEntry = ClassEntry {
    name: "Array",
    description: "Collects data arguments into a JSON array",
    constructor: construct_array,
};

#[linkme::distributed_slice(CLASSES)]
static TEXT_CLASS: ClassEntry = ClassEntry {
    name: "Text",
    description: "Concatenates scalar arguments into a string",
    constructor: construct_text,
};

fn construct_array(args: Vec<Element>) -> Result<Element, BoxError> {
    let items = args
        .into_iter()
        .enumerate()
        .map(|(position, arg)| match arg {
            Element::Value(value) => Ok(value),
            Element::Instance(_) => Err(format!("argument {position} is not data")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Element::Value(Value::Array(items)))
}

fn construct_text(args: Vec<Element>) -> Result<Element, BoxError> {
    let mut text = String::new();
    for (position, arg) in args.iter().enumerate() {
        match arg.as_value() {
            Some(Value::String(part)) => text.push_str(part),
            Some(Value::Null) => {}
            Some(scalar @ (Value::Number(_) | Value::Bool(_))) => text.push_str(&scalar.to_string()),
            _ => return Err(format!("argument {position} is not a scalar").into()),
        }
    }
    Ok(Element::from(text))
}
