//! Configuration loader tests

use std::io::Write;
use tracing_subscriber::filter::LevelFilter;
use tsc_infrastructure::config::{AppConfig, ConfigLoader, LoggingConfig};
use tsc_infrastructure::constants::{CONFIG_ENV_PREFIX, LOG_FILTER_ENV};
use tsc_infrastructure::logging::build_env_filter;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp config");
    file
}

/// Unique prefix so env vars set by other tests never leak in
fn isolated_loader() -> ConfigLoader {
    ConfigLoader::new().with_env_prefix("TSC_CONFIG_TEST_UNSET")
}

#[test]
fn test_defaults_without_file() {
    let loader = isolated_loader().with_config_path("/nonexistent/tsc.toml");
    let config = loader.load().expect("defaults load");
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.logging.level, "info");
    assert!(!config.cache.log_lookups);
}

#[test]
fn test_file_overrides_defaults() {
    let file = write_config(
        r#"
[logging]
level = "debug"
json_format = true

[cache]
log_lookups = true
"#,
    );

    let config = isolated_loader()
        .with_config_path(file.path())
        .load()
        .expect("file loads");

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert!(config.cache.log_lookups);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("[cache]\nlog_lookups = true\n");

    let config = isolated_loader()
        .with_config_path(file.path())
        .load()
        .expect("file loads");

    assert!(config.cache.log_lookups);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_invalid_level_in_file_is_rejected() {
    let file = write_config("[logging]\nlevel = \"shouty\"\n");

    let err = isolated_loader()
        .with_config_path(file.path())
        .load()
        .expect_err("invalid level");
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_config_path_accessor() {
    let loader = ConfigLoader::new().with_config_path("custom.toml");
    assert_eq!(
        loader.config_path().map(|p| p.to_string_lossy().into_owned()),
        Some("custom.toml".to_string())
    );
}

/// Run with: `cargo test -p tsc-infrastructure --test unit -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let file = write_config("[logging]\nlevel = \"debug\"\n");
    let key = format!("{CONFIG_ENV_PREFIX}_LOGGING__LEVEL");
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::set_var(&key, "error");
    }

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .expect("env loads");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::remove_var(&key);
    }
    assert_eq!(config.logging.level, "error");
}

/// Run with: `cargo test -p tsc-infrastructure --test unit -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_log_filter_env_takes_precedence_over_config_level() {
    let config = LoggingConfig {
        level: "error".to_string(),
        json_format: false,
    };

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::set_var(LOG_FILTER_ENV, "debug");
    }
    let from_env = build_env_filter(&config).expect("valid level");

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::remove_var(LOG_FILTER_ENV);
    }
    let from_config = build_env_filter(&config).expect("valid level");

    assert_eq!(from_env.max_level_hint(), Some(LevelFilter::DEBUG));
    assert_eq!(from_config.max_level_hint(), Some(LevelFilter::ERROR));
}
