//! HTTP handlers for the greeting and the order operations.

pub mod greeting;
pub mod operations;
pub use greeting::*;
pub use operations::*;
