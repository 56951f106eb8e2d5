//! Domain Port Interfaces
//!
//! Boundary contracts the infrastructure layer implements or consumes.
//!
//! - **resolver** - the dependency-injection container lookup contract

/// Container lookup port
pub mod resolver;

pub use resolver::ServiceResolver;
