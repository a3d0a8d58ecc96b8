//! Constant-time operations to prevent timing attacks
//!
//! Every helper here expresses its result through bitwise and arithmetic
//! operations only. None of them branch on the data they inspect.

use core::hint::black_box;

/// Returns 1 if `value` is non-zero, 0 otherwise
///
/// For any non-zero byte either `value` or its two's-complement negation has
/// the top bit set, so OR-ing them and shifting the sign bit down yields the
/// answer without a comparison.
#[inline]
pub fn ct_is_nonzero_u8(value: u8) -> u8 {
    (value | value.wrapping_neg()) >> 7
}

/// Collapse a difference accumulator to an equality bit
///
/// Returns 1 when `acc` is zero (no byte differed), 0 otherwise. This is
/// used instead of `acc == 0`, which some back ends lower to a branch.
#[inline]
pub fn ct_eq_bit(acc: u8) -> u8 {
    ct_is_nonzero_u8(acc) ^ 1
}

/// OR together the XOR of every byte pair
///
/// The slices must be the same length. The loop never exits early; the
/// accumulator is routed through `black_box` on every step so the optimizer
/// cannot turn it into a short-circuiting comparison.
#[inline(never)]
pub fn ct_accumulate_diff(a: &[u8], b: &[u8]) -> u8 {
    debug_assert_eq!(a.len(), b.len());

    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc = black_box(acc | (x ^ y));
    }
    acc
}
