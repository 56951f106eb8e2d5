//! Infrastructure constants
//!
//! Defaults shared by configuration loading, logging and the cache.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "tsc.toml";

/// Default configuration directory under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "tsc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "TSC";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "TSC_LOG";
