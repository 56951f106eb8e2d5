//! # Test Service Cache - Domain Layer
//!
//! Core types shared by every layer of the test service cache:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`ports`] | Container lookup contract ([`ServiceResolver`]) |
//! | [`value_objects`] | [`ServiceDescriptor`] |
//!
//! This crate has no knowledge of any concrete container.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::ServiceResolver;
pub use value_objects::ServiceDescriptor;
