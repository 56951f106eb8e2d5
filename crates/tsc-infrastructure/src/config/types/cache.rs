//! Service cache configuration types

use serde::{Deserialize, Serialize};

/// Service cache configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Emit a debug event for every lookup (override hit or container fallback)
    pub log_lookups: bool,
}
