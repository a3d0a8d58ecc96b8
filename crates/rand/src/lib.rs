//! Cryptographically secure randomness for the hygiene library
//!
//! This crate does not generate entropy. It consumes OS-supplied randomness
//! and post-processes it into the shapes security code needs:
//!
//! - [`random_bytes`]: fill a buffer, retrying partial and interrupted reads
//! - [`random_scalar`]: a fixed-width value of any [`RandomScalar`] type
//! - [`uniform_bounded_u32`] / [`uniform_bounded_u64`]: rejection sampling
//!   over `[0, max_bounds)` without modulo bias
//! - [`shuffle`]: Fisher–Yates permutation built on the bounded sampler
//!
//! The free functions draw from the operating system. [`Csprng`] exposes the
//! same operations over any [`EntropySource`], which is how tests substitute
//! a deterministic stream.
//!
//! An unrecoverable entropy failure terminates the process.
//! [`Csprng::try_fill_bytes`] is the one opt-in fallible path.

pub mod bounded;
pub mod csprng;
mod os;
pub mod scalar;
pub mod shuffle;
pub mod source;

pub use bounded::{uniform_bounded_u32, uniform_bounded_u64, uniform_bounded_usize, MAX_REDRAWS};
pub use csprng::{random_bytes, random_scalar, Csprng};
pub use scalar::RandomScalar;
pub use shuffle::shuffle;
pub use source::{EntropySource, OsEntropy, RngSource, SourceError};
