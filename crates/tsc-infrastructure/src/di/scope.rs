//! Per-test service scope
//!
//! A [`ServiceScope`] borrows a long-lived [`ServiceCache`] together with
//! the container it falls back to. On drop the cache is put back exactly as
//! it was when the scope opened: overrides added inside the scope disappear,
//! suite-level overrides that were replaced, removed or cleared inside the
//! scope come back. Tests that take a scope cannot leak overrides into the
//! next test even when they panic.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tsc_domain::{Error, Result, ServiceDescriptor, ServiceResolver};
//! use tsc_infrastructure::cache::ServiceCache;
//!
//! struct NoBeans;
//!
//! impl ServiceResolver for NoBeans {
//!     fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
//!     where
//!         T: ?Sized + Send + Sync + 'static,
//!     {
//!         Err(Error::service_not_found(descriptor.name(), "no beans"))
//!     }
//! }
//!
//! let mut cache = ServiceCache::new();
//! cache.replace_service("region", Arc::new("eu-west".to_string()));
//! {
//!     let mut scope = cache.scope(NoBeans);
//!     scope.replace_service("clock", Arc::new(42_u64));
//!     let clock: Arc<u64> = scope.get_service("clock", "clock").unwrap();
//!     assert_eq!(*clock, 42);
//! }
//! assert_eq!(cache.aliases(), vec!["region"]);
//! ```

use crate::cache::ServiceCache;
use crate::cache::service_cache::ServiceHandle;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use tsc_domain::error::Result;
use tsc_domain::ports::ServiceResolver;
use tsc_domain::value_objects::ServiceDescriptor;

/// Override scope that restores the cache on drop
pub struct ServiceScope<'a, R> {
    cache: &'a mut ServiceCache,
    container: R,
    saved: HashMap<String, ServiceHandle>,
}

impl<'a, R: ServiceResolver> ServiceScope<'a, R> {
    /// Open a scope over `cache`, falling back to `container`
    pub fn new(cache: &'a mut ServiceCache, container: R) -> Self {
        let saved = cache.snapshot();
        Self {
            cache,
            container,
            saved,
        }
    }

    /// Resolve `alias`, preferring a registered override
    pub fn get_service<T>(
        &self,
        alias: &str,
        descriptor: impl Into<ServiceDescriptor>,
    ) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.cache
            .get_service(alias, &descriptor.into(), &self.container)
    }

    /// Register `service` under `alias`, replacing any earlier override
    pub fn replace_service<T>(&mut self, alias: impl Into<String>, service: Arc<T>) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.cache.replace_service(alias, service)
    }

    /// Drop the override for `alias`
    pub fn remove_service(&mut self, alias: &str) -> bool {
        self.cache.remove_service(alias)
    }

    /// Discard every override, including ones registered before the scope
    ///
    /// They are restored when the scope is dropped.
    pub fn clear_services(&mut self) {
        self.cache.clear_services();
    }

    /// The cache this scope writes to
    pub fn cache(&self) -> &ServiceCache {
        &*self.cache
    }

    /// The fallback container
    pub fn container(&self) -> &R {
        &self.container
    }
}

impl<R> Drop for ServiceScope<'_, R> {
    fn drop(&mut self) {
        debug!(
            aliases = ?self.cache.aliases(),
            restored = self.saved.len(),
            "Service scope closed, restoring overrides"
        );
        self.cache.restore(std::mem::take(&mut self.saved));
    }
}

impl ServiceCache {
    /// Open a [`ServiceScope`] over this cache
    pub fn scope<R: ServiceResolver>(&mut self, container: R) -> ServiceScope<'_, R> {
        ServiceScope::new(self, container)
    }
}
