//! Dependency Injection integration
//!
//! Connects the service cache to the container it stands in front of.
//!
//! - [`CatalogResolver`] - falls back to a dill [`dill::Catalog`]
//! - [`ServiceScope`] - per-test override scope that restores the cache on drop

pub mod catalog;
pub mod scope;

pub use catalog::CatalogResolver;
pub use scope::ServiceScope;
