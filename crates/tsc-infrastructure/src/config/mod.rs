//! Configuration
//!
//! Typed configuration merged with Figment from defaults, an optional TOML
//! file and `TSC_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CacheConfig, LoggingConfig};
