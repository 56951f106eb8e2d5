//! Service override cache
//!
//! Holds test-time replacements for container services.

pub mod service_cache;

pub use service_cache::ServiceCache;
