//! Common security primitives for the hygiene library
//!
//! This crate provides secure erasure of sensitive memory and constant-time
//! buffer comparison. Both operate only on caller-supplied buffers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

// Re-export memory safety functions and traits
pub use security::memory::{
    secure_memzero,
    secure_memzero_raw,
    secure_memzero_value,
    timing_safe_compare,
    timing_safe_compare_choice,
    SecureCompare,
};

#[cfg(feature = "std")]
pub use security::memory::try_timing_safe_compare;

// Re-export memory barrier utilities
pub use security::memory::barrier;
