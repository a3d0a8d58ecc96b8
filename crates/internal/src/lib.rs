//! Internal utilities for the hygiene library
//!
//! Nothing here is part of the stable surface; the public crates build on
//! these helpers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
