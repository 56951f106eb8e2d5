//! Configuration types module

pub mod app;
pub mod cache;
pub mod logging;

pub use app::*;
