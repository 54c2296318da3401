//! Container configuration types

use crate::constants::DEFAULT_DETECT_CYCLES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root container configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Fail with a cyclic-dependency error instead of overflowing the stack
    pub detect_cycles: bool,

    /// Element map file (`.toml` or `.json`) loaded into the root container
    pub element_map: Option<PathBuf>,

    /// Directory relative class-file paths are resolved against
    pub class_file_root: Option<PathBuf>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            detect_cycles: DEFAULT_DETECT_CYCLES,
            element_map: None,
            class_file_root: None,
        }
    }
}
