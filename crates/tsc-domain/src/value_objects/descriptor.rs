//! Service descriptor value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed to the container when no override is registered
///
/// # Example
///
/// ```
/// use tsc_domain::ServiceDescriptor;
///
/// let descriptor = ServiceDescriptor::from("user_service");
/// assert_eq!(descriptor.name(), "user_service");
/// assert_eq!(descriptor.to_string(), "user_service");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    name: String,
}

impl ServiceDescriptor {
    /// Create a descriptor for the named service
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    /// Name the container knows the service by
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for ServiceDescriptor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ServiceDescriptor {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for ServiceDescriptor {
    fn as_ref(&self) -> &str {
        &self.name
    }
}
