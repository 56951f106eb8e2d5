//! Error extension utilities
//!
//! Context extension methods that turn foreign errors into domain errors.

use std::fmt;
use tsc_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```
/// use tsc_infrastructure::error_ext::ErrorContext;
///
/// let parsed: tsc_domain::Result<u16> = "not a port"
///     .parse::<u16>()
///     .config_context("Invalid port");
/// assert!(parsed.unwrap_err().to_string().starts_with("Configuration error: Invalid port"));
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to a container error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context with lazy evaluation for expensive context creation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Container {
            message: format!("{}: {}", context, err),
            source: Some(Box::new(err)),
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::Container {
            message: format!("{}: {}", f(), err),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::Config {
            message: format!("{}: {}", context, err),
        })
    }
}
