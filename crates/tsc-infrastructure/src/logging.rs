//! Structured logging with tracing
//!
//! Centralised subscriber setup for test binaries. Every test binary may
//! call [`init_logging`]; only the first call installs a subscriber.

use crate::constants::LOG_FILTER_ENV;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tsc_domain::error::{Error, Result};

pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// Returns `Ok(true)` when this call installed the global subscriber and
/// `Ok(false)` when one was already in place.
pub fn init_logging(config: &LoggingConfig) -> Result<bool> {
    let level = parse_log_level(&config.level)?;
    let filter = build_env_filter(config)?;

    let registry = Registry::default().with(filter);
    let installed = if config.json_format {
        registry
            .with(fmt::layer().json().with_target(true).with_test_writer())
            .try_init()
            .is_ok()
    } else {
        registry
            .with(fmt::layer().with_target(true).with_test_writer())
            .try_init()
            .is_ok()
    };

    if installed {
        info!("Logging initialized with level: {}", level);
    }
    Ok(installed)
}

/// Build the subscriber filter for `config`
///
/// A directive in `TSC_LOG` takes precedence over the configured level.
pub fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let level = parse_log_level(&config.level)?;
    Ok(EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase())))
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {}. Use trace, debug, info, warn, or error",
            level
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &std::path::Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}
