//! # Test Service Cache - Infrastructure Layer
//!
//! Everything a test suite needs to swap container services for mocks.
//!
//! ### Overrides
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | `ServiceCache`: alias → override, with container fallback |
//! | [`di`] | dill catalog resolver and the per-test `ServiceScope` |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (TOML + env) |
//! | [`constants`] | Centralized defaults |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers for foreign errors |

pub mod cache;
pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use cache::ServiceCache;
pub use di::{CatalogResolver, ServiceScope};
pub use error_ext::ErrorContext;
