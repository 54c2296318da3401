//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Grammar constants are defined in `ioc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "ioc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "ioc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "IOC";

/// Separator for nested keys in environment variables (`IOC_CONTAINER__DETECT_CYCLES`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "IOC_LOG";

/// Default log file stem when writing to a directory
pub const LOG_FILE_STEM: &str = "ioc";

// ============================================================================
// CONTAINER CONSTANTS
// ============================================================================

/// Cycle detection is on unless configured otherwise
pub const DEFAULT_DETECT_CYCLES: bool = true;
