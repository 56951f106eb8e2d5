//! Service Resolver Port
//!
//! The contract of the dependency-injection container that supplies the
//! real services: `resolve(descriptor) -> service`. The cache consults it
//! whenever a test has not registered an override.

use crate::error::Result;
use crate::value_objects::ServiceDescriptor;
use std::sync::Arc;

/// Container lookup interface
///
/// Implementations decide what an unknown descriptor means; callers must
/// not assume anything beyond "an error comes back".
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tsc_domain::{Error, Result, ServiceDescriptor, ServiceResolver};
///
/// struct Empty;
///
/// impl ServiceResolver for Empty {
///     fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
///     where
///         T: ?Sized + Send + Sync + 'static,
///     {
///         Err(Error::service_not_found(descriptor.name(), "empty container"))
///     }
/// }
///
/// let err = Empty.resolve::<String>(&"anything".into()).unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub trait ServiceResolver {
    /// Resolve the default instance for `descriptor` as a `T` handle
    fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static;
}

impl<R: ServiceResolver + ?Sized> ServiceResolver for &R {
    fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        (**self).resolve(descriptor)
    }
}

impl<R: ServiceResolver + ?Sized> ServiceResolver for Arc<R> {
    fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        (**self).resolve(descriptor)
    }
}
