//! Application configuration root

use serde::{Deserialize, Serialize};

use super::container::ContainerConfig;
use super::logging::LoggingConfig;

/// Root of all configuration sections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Root container settings
    pub container: ContainerConfig,
}
