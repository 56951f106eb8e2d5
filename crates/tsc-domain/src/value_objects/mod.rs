//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceDescriptor`] | Identifier the container resolves a default service from |

/// Service descriptor value object
pub mod descriptor;

pub use descriptor::ServiceDescriptor;
