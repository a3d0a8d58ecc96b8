//! Error handling for the hygiene primitives

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Specialized result types for different operations
pub type RandomResult<T> = Result<T>;
pub type CompareResult<T> = Result<T>;
