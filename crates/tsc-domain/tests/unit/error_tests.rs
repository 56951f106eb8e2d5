//! Unit tests for domain error types

use tsc_domain::Error;

#[test]
fn test_service_not_found_error() {
    let error = Error::service_not_found("user_service", "no bean registered");
    match &error {
        Error::ServiceNotFound {
            descriptor,
            message,
        } => {
            assert_eq!(descriptor, "user_service");
            assert_eq!(message, "no bean registered");
        }
        _ => panic!("Expected ServiceNotFound error"),
    }
    assert!(error.is_not_found());
    assert_eq!(
        error.to_string(),
        "Service not found: user_service: no bean registered"
    );
}

#[test]
fn test_service_type_mismatch_names_requested_type() {
    let error = Error::service_type_mismatch::<String, _>("mailer");
    match &error {
        Error::ServiceTypeMismatch { alias, expected } => {
            assert_eq!(alias, "mailer");
            assert!(expected.contains("String"));
        }
        _ => panic!("Expected ServiceTypeMismatch error"),
    }
    assert!(!error.is_not_found());
}

#[test]
fn test_container_error_with_source() {
    let io = std::io::Error::other("socket closed");
    let error = Error::container_with_source("catalog unavailable", io);
    match &error {
        Error::Container { message, source } => {
            assert_eq!(message, "catalog unavailable");
            assert!(source.is_some());
        }
        _ => panic!("Expected Container error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_container_error_without_source() {
    let error = Error::container("catalog unavailable");
    assert!(std::error::Error::source(&error).is_none());
    assert_eq!(error.to_string(), "Container error: catalog unavailable");
}

#[test]
fn test_config_error() {
    let error = Error::config("Missing required config");
    match error {
        Error::Config { message } => assert_eq!(message, "Missing required config"),
        _ => panic!("Expected Config error"),
    }
}
