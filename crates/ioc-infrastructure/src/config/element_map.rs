//! Element-map files
//!
//! Element maps can be written in TOML or JSON with the same shape:
//!
//! ```toml
//! Bar = "Bar"
//!
//! [Foo]
//! class = "Foo"
//! args = ["@Bar", "$"]
//!
//! [Foo.submap]
//! Helper = "Helper"
//! ```
//!
//! Only the top level is checked here; entries are validated when used.

use std::path::Path;

use ioc_domain::error::{Error, Result};
use ioc_domain::ElementMapSource;
use serde_json::Value;
use tracing::debug;

use crate::error_ext::ErrorContext;

/// Element-map file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementMapFormat {
    /// TOML tables
    Toml,
    /// JSON object
    Json,
}

impl ElementMapFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Read an element map from a `.toml` or `.json` file
pub fn load_element_map<P: AsRef<Path>>(path: P) -> Result<ElementMapSource> {
    let path = path.as_ref();
    let format = ElementMapFormat::from_path(path).ok_or_else(|| {
        Error::configuration(format!(
            "Unsupported element map format: {} (expected .toml or .json)",
            path.display()
        ))
    })?;
    let content = std::fs::read_to_string(path)
        .io_context(format!("Failed to read element map {}", path.display()))?;
    let element_map = parse_element_map(&content, format)?;
    debug!(path = %path.display(), aliases = element_map.len(), "Element map file parsed");
    Ok(element_map)
}

/// Parse element-map text in the given format
pub fn parse_element_map(content: &str, format: ElementMapFormat) -> Result<ElementMapSource> {
    let value: Value = match format {
        ElementMapFormat::Toml => {
            toml::from_str(content).config_context("Invalid TOML element map")?
        }
        ElementMapFormat::Json => {
            serde_json::from_str(content).config_context("Invalid JSON element map")?
        }
    };
    ElementMapSource::from_json(value)
}
