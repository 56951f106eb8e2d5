//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::cache::CacheConfig;
pub use super::logging::LoggingConfig;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Service cache configuration
    pub cache: CacheConfig,
}
