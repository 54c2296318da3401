//! Domain Port Interfaces
//!
//! Capabilities the container needs from its host but does not implement
//! itself. The infrastructure crate ships default adapters for both.
//!
//! - **class_constructor** - build an instance from a class name and arguments
//! - **class_file** - include a class file before construction

/// Construction-by-name capability
pub mod class_constructor;
/// Class-file inclusion capability
pub mod class_file;

pub use class_constructor::ClassConstructor;
pub use class_file::ClassFileLoader;
