//! Configuration
//!
//! Application settings (figment: defaults, TOML file, environment) and
//! element-map files.

pub mod element_map;
pub mod loader;
pub mod types;

pub use element_map::load_element_map;
pub use loader::ConfigLoader;
pub use types::*;
