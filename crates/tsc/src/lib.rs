//! # Test Service Cache
//!
//! Lets a test suite substitute mock services for the objects a
//! dependency-injection container would normally hand out.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tsc::{Error, Result, ServiceCache, ServiceDescriptor, ServiceResolver};
//!
//! trait UserService: Send + Sync {
//!     fn name(&self) -> &str;
//! }
//!
//! struct Real;
//! impl UserService for Real {
//!     fn name(&self) -> &str { "real" }
//! }
//!
//! struct Mock;
//! impl UserService for Mock {
//!     fn name(&self) -> &str { "mock" }
//! }
//!
//! struct Container;
//! impl ServiceResolver for Container {
//!     fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
//!     where
//!         T: ?Sized + Send + Sync + 'static,
//!     {
//!         let real: Arc<dyn UserService> = Arc::new(Real);
//!         let any: Box<dyn std::any::Any> = Box::new(real);
//!         any.downcast::<Arc<T>>()
//!             .map(|b| *b)
//!             .map_err(|_| Error::service_not_found(descriptor.name(), "unknown"))
//!     }
//! }
//!
//! let mut cache = ServiceCache::new();
//! cache.replace_service::<dyn UserService>("user_service", Arc::new(Mock));
//!
//! let svc = cache
//!     .get_service::<dyn UserService, _>("user_service", &"user_service".into(), &Container)
//!     .unwrap();
//! assert_eq!(svc.name(), "mock");
//!
//! cache.clear_services();
//! let svc = cache
//!     .get_service::<dyn UserService, _>("user_service", &"user_service".into(), &Container)
//!     .unwrap();
//! assert_eq!(svc.name(), "real");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, [`ServiceDescriptor`] and the [`ServiceResolver`] port
//! - `infrastructure` - [`ServiceCache`], [`ServiceScope`], dill bridge, config, logging

/// Domain layer - errors, descriptors and the container port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use tsc_domain::*;
}

/// Infrastructure layer - cache, DI bridge, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use tsc_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the cache API at the crate root
pub use infrastructure::{CatalogResolver, ServiceCache, ServiceScope};
