//! # hygiene
//!
//! Low-level cryptographic hygiene primitives shared by security-sensitive
//! code: secure erasure of sensitive memory, constant-time buffer comparison,
//! and OS-backed randomness with unbiased bounded sampling and shuffling.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`hygiene-common`]: `secure_memzero`, `timing_safe_compare`
//! - [`hygiene-rand`]: `random_bytes`, `random_scalar`, bounded sampling, `shuffle`
//! - [`hygiene-internal`]: branch-free constant-time helpers
//! - [`hygiene-api`]: error types for the fallible `try_*` entry points
//!
//! ## Example
//!
//! ```
//! use hygiene::prelude::*;
//!
//! let mut token = [0u8; 32];
//! random_bytes(&mut token);
//!
//! let presented = token;
//! assert!(timing_safe_compare(&token, &presented, token.len()));
//!
//! let die = uniform_bounded_u32(6);
//! assert!(die < 6);
//!
//! secure_memzero(&mut token);
//! assert_eq!(token, [0u8; 32]);
//! ```

pub use hygiene_api as api;
pub use hygiene_common as common;
pub use hygiene_internal as internal;
pub use hygiene_rand as rand;

// Re-export workspace dependencies that appear in public signatures
pub use subtle;
pub use zeroize;

/// Common imports for hygiene users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Secure memory
    pub use crate::common::{
        secure_memzero,
        secure_memzero_raw,
        timing_safe_compare,
        SecureCompare,
    };

    // Randomness
    pub use crate::rand::{
        random_bytes,
        random_scalar,
        shuffle,
        uniform_bounded_u32,
        uniform_bounded_u64,
        Csprng,
        EntropySource,
        OsEntropy,
    };
}
