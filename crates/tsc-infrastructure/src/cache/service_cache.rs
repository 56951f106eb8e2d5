//! Service override cache
//!
//! Maps alias names to substitute services registered by tests. Lookups
//! return the override when one exists and otherwise fall back to the
//! container.
//!
//! Services are stored type-erased as `Arc<T>` handles, so trait objects
//! work as well as concrete types. The contract per alias is that callers
//! request the same `T` the test registered; anything else is reported as
//! [`Error::ServiceTypeMismatch`] rather than silently falling back.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tsc_domain::{Error, Result, ServiceDescriptor, ServiceResolver};
//! use tsc_infrastructure::cache::ServiceCache;
//!
//! struct RealContainer;
//!
//! impl ServiceResolver for RealContainer {
//!     fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
//!     where
//!         T: ?Sized + Send + Sync + 'static,
//!     {
//!         Err(Error::service_not_found(descriptor.name(), "not wired in this example"))
//!     }
//! }
//!
//! let mut cache = ServiceCache::new();
//! let mock = Arc::new(String::from("mock user service"));
//! cache.replace_service("user_service", Arc::clone(&mock));
//!
//! let found: Arc<String> = cache
//!     .get_service("user_service", &"user_service".into(), &RealContainer)
//!     .unwrap();
//! assert!(Arc::ptr_eq(&found, &mock));
//!
//! cache.clear_services();
//! assert!(cache
//!     .get_service::<String, _>("user_service", &"user_service".into(), &RealContainer)
//!     .is_err());
//! ```

use crate::config::CacheConfig;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use tsc_domain::error::{Error, Result};
use tsc_domain::ports::ServiceResolver;
use tsc_domain::value_objects::ServiceDescriptor;

/// Type-erased `Arc<T>` handle
pub(crate) type ServiceHandle = Arc<dyn Any + Send + Sync>;

/// Registry of test-time service overrides
#[derive(Default)]
pub struct ServiceCache {
    services: HashMap<String, ServiceHandle>,
    log_lookups: bool,
}

impl ServiceCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache configured from `config`
    pub fn with_config(config: &CacheConfig) -> Self {
        Self {
            services: HashMap::new(),
            log_lookups: config.log_lookups,
        }
    }

    /// Resolve `alias`, preferring a registered override
    ///
    /// Without an override the container resolves `descriptor` and its
    /// result, including any error, is returned as-is.
    pub fn get_service<T, R>(
        &self,
        alias: &str,
        descriptor: &ServiceDescriptor,
        container: &R,
    ) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
        R: ServiceResolver,
    {
        if let Some(service) = self.try_get_override::<T>(alias)? {
            if self.log_lookups {
                debug!(alias, "Service override hit");
            }
            return Ok(service);
        }

        if self.log_lookups {
            debug!(alias, descriptor = %descriptor, "No override, resolving from container");
        }
        container.resolve::<T>(descriptor)
    }

    /// Look up the override for `alias` without consulting any container
    pub fn try_get_override<T>(&self, alias: &str) -> Result<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        match self.services.get(alias) {
            None => Ok(None),
            Some(handle) => handle
                .downcast_ref::<Arc<T>>()
                .map(|service| Some(Arc::clone(service)))
                .ok_or_else(|| Error::service_type_mismatch::<T, _>(alias)),
        }
    }

    /// Register `service` under `alias`, replacing any earlier override
    ///
    /// Returns `true` when an earlier override was replaced.
    pub fn replace_service<T>(&mut self, alias: impl Into<String>, service: Arc<T>) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let alias = alias.into();
        let replaced = self
            .services
            .insert(alias.clone(), Arc::new(service))
            .is_some();
        debug!(
            alias = %alias,
            service_type = std::any::type_name::<T>(),
            replaced,
            "Registered service override"
        );
        replaced
    }

    /// Drop the override for `alias`, returning whether one existed
    pub fn remove_service(&mut self, alias: &str) -> bool {
        let removed = self.services.remove(alias).is_some();
        if removed {
            debug!(alias, "Removed service override");
        }
        removed
    }

    /// Discard every override
    pub fn clear_services(&mut self) {
        if !self.services.is_empty() {
            debug!(count = self.services.len(), "Clearing service overrides");
        }
        self.services = HashMap::new();
    }

    /// Whether an override is registered for `alias`
    pub fn has_service(&self, alias: &str) -> bool {
        self.services.contains_key(alias)
    }

    /// Number of registered overrides
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no overrides are registered
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Registered alias names, sorted
    pub fn aliases(&self) -> Vec<&str> {
        let mut aliases: Vec<&str> = self.services.keys().map(String::as_str).collect();
        aliases.sort_unstable();
        aliases
    }

    /// Copy of the current overrides, sharing the stored handles
    pub(crate) fn snapshot(&self) -> HashMap<String, ServiceHandle> {
        self.services.clone()
    }

    /// Replace every override with a previously taken snapshot
    pub(crate) fn restore(&mut self, snapshot: HashMap<String, ServiceHandle>) {
        self.services = snapshot;
    }
}

impl fmt::Debug for ServiceCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCache")
            .field("aliases", &self.aliases())
            .field("log_lookups", &self.log_lookups)
            .finish()
    }
}
