//! Security primitives and memory safety utilities
//!
//! This module provides the erasure and comparison primitives used wherever
//! the hygiene ecosystem handles keys, tokens or MACs.

pub mod memory;

pub use memory::{barrier, SecureCompare};
