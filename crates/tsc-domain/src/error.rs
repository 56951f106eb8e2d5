//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the test service cache
#[derive(Error, Debug)]
pub enum Error {
    /// The container has no service for the descriptor
    #[error("Service not found: {descriptor}: {message}")]
    ServiceNotFound {
        /// Name of the descriptor that could not be resolved
        descriptor: String,
        /// Container-provided detail
        message: String,
    },

    /// An override exists under the alias but holds a different type
    #[error("Service type mismatch for alias '{alias}': expected {expected}")]
    ServiceTypeMismatch {
        /// Alias the override was registered under
        alias: String,
        /// Type name the caller asked for
        expected: &'static str,
    },

    /// Container-related error
    #[error("Container error: {message}")]
    Container {
        /// Description of the container error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error
        message: String,
    },
}

// Lookup error creation methods
impl Error {
    /// Create a service not found error
    pub fn service_not_found<D: Into<String>, S: Into<String>>(descriptor: D, message: S) -> Self {
        Self::ServiceNotFound {
            descriptor: descriptor.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error for `alias`, naming the requested type `T`
    pub fn service_type_mismatch<T: ?Sized, S: Into<String>>(alias: S) -> Self {
        Self::ServiceTypeMismatch {
            alias: alias.into(),
            expected: std::any::type_name::<T>(),
        }
    }
}

// Container error creation methods
impl Error {
    /// Create a container error
    pub fn container<S: Into<String>>(message: S) -> Self {
        Self::Container {
            message: message.into(),
            source: None,
        }
    }

    /// Create a container error with source
    pub fn container_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Container {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether this error came from a failed container lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ServiceNotFound { .. })
    }
}
