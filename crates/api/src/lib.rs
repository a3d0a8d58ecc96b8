//! Public error types for the hygiene library
//!
//! This crate holds the error surface shared by the hygiene member crates.
//! The infallible primitives never produce these errors; they back the
//! explicit `try_*` entry points only.

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use error::validate;
