//! dill Catalog resolver
//!
//! Adapts a dill IoC [`Catalog`] to the [`ServiceResolver`] port so the
//! service cache can fall back to the real container.
//!
//! ## Pattern
//!
//! ```text
//! ServiceCache::get_service(alias, descriptor)
//!        │ no override
//!        ↓
//! CatalogResolver::resolve::<T>(descriptor) → Catalog::get_one::<T>()
//! ```
//!
//! dill resolves by interface type, so the descriptor only names the
//! service in diagnostics and in the error returned when the catalog
//! cannot produce exactly one instance. Unregistered and ambiguous
//! bindings become [`Error::ServiceNotFound`]; every other injection
//! failure is an [`Error::Container`] carrying the dill error as source.

use crate::error_ext::ErrorContext;
use dill::{Catalog, CatalogBuilder, InjectionError};
use std::sync::Arc;
use tracing::debug;
use tsc_domain::error::{Error, Result};
use tsc_domain::ports::ServiceResolver;
use tsc_domain::value_objects::ServiceDescriptor;

/// Resolver backed by a dill catalog
pub struct CatalogResolver {
    catalog: Catalog,
}

impl CatalogResolver {
    /// Wrap a built catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Validate the dependency graph of `builder`, then build the catalog
    ///
    /// Dangling, ambiguous or scope-inverted dependencies fail here with
    /// [`Error::Container`] instead of surfacing later as a lookup failure.
    pub fn validated(builder: &mut CatalogBuilder) -> Result<Self> {
        builder
            .validate()
            .context("Invalid dill catalog")?;
        Ok(Self::new(builder.build()))
    }

    /// Access the underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl From<Catalog> for CatalogResolver {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

impl ServiceResolver for CatalogResolver {
    fn resolve<T>(&self, descriptor: &ServiceDescriptor) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        debug!(
            descriptor = %descriptor,
            service_type = std::any::type_name::<T>(),
            "Resolving service from dill catalog"
        );
        self.catalog
            .get_one::<T>()
            .map_err(|e| injection_error(descriptor, e))
    }
}

/// Map a dill injection failure for `descriptor` onto the domain error
fn injection_error(descriptor: &ServiceDescriptor, err: InjectionError) -> Error {
    match err {
        InjectionError::Unregistered(_) | InjectionError::Ambiguous(_) => {
            Error::service_not_found(descriptor.name(), err.to_string())
        }
        other => Error::container_with_source(
            format!("Cannot resolve service '{descriptor}' from dill catalog"),
            other,
        ),
    }
}

impl std::fmt::Debug for CatalogResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogResolver").finish()
    }
}
