//! Secure erasure and constant-time comparison
//!
//! `secure_memzero` must stay observable even when the optimizer can prove
//! the buffer is dead right after the call. Plain `fill(0)` on a buffer that
//! is about to be dropped is a legal dead store and may be removed, so the
//! zeroing goes through `zeroize` (volatile writes plus a compiler fence)
//! and the buffer is then handed to `black_box` as a fake read.
//!
//! `timing_safe_compare` touches every byte up to `len` regardless of where
//! the first difference sits and reduces the result without branching.

use core::hint::black_box;

use hygiene_internal::constant_time::{ct_accumulate_diff, ct_eq_bit};
use subtle::Choice;
use zeroize::Zeroize;

#[cfg(feature = "std")]
use hygiene_api::{error::CompareResult, validate};

/// Overwrite every byte of `buf` with zero
///
/// The write survives dead-store elimination. An empty buffer is a no-op.
pub fn secure_memzero(buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }

    buf.zeroize();
    barrier::compiler_fence_seq_cst();
    black_box(&*buf);
}

/// Overwrite `size` bytes starting at `ptr` with zero
///
/// A null `ptr` or a zero `size` is a no-op.
///
/// # Safety
///
/// If `ptr` is non-null it must be valid for writes of `size` bytes and no
/// other reference may alias that region for the duration of the call.
pub unsafe fn secure_memzero_raw(ptr: *mut u8, size: usize) {
    if ptr.is_null() || size == 0 {
        return;
    }

    // SAFETY: non-null and valid for `size` writable bytes per the contract above.
    let buf = unsafe { core::slice::from_raw_parts_mut(ptr, size) };
    secure_memzero(buf);
}

/// Erase any `Zeroize` value and fence the write
pub fn secure_memzero_value<Z: Zeroize + ?Sized>(value: &mut Z) {
    value.zeroize();
    barrier::compiler_fence_seq_cst();
    black_box(&*value);
}

/// Compare the first `len` bytes of `b1` and `b2` in constant time
///
/// Returns true iff those bytes are identical. Running time depends only on
/// `len`.
///
/// # Panics
///
/// Panics if either buffer is shorter than `len`. Use
/// [`try_timing_safe_compare`] to get an error instead.
pub fn timing_safe_compare(b1: &[u8], b2: &[u8], len: usize) -> bool {
    bool::from(timing_safe_compare_choice(b1, b2, len))
}

/// Same as [`timing_safe_compare`] but returns a `subtle::Choice`
///
/// Useful when the result feeds further constant-time selection instead of
/// a branch.
pub fn timing_safe_compare_choice(b1: &[u8], b2: &[u8], len: usize) -> Choice {
    let acc = ct_accumulate_diff(&b1[..len], &b2[..len]);
    Choice::from(ct_eq_bit(acc))
}

/// Checked variant of [`timing_safe_compare`]
///
/// Buffer lengths are public, so rejecting a short buffer up front leaks
/// nothing about the contents.
#[cfg(feature = "std")]
pub fn try_timing_safe_compare(b1: &[u8], b2: &[u8], len: usize) -> CompareResult<bool> {
    validate::min_length("timing_safe_compare: first buffer", b1.len(), len)?;
    validate::min_length("timing_safe_compare: second buffer", b2.len(), len)?;
    Ok(timing_safe_compare(b1, b2, len))
}

/// Trait for types that can be securely compared
///
/// This trait provides constant-time comparison operations to prevent
/// timing attacks.
pub trait SecureCompare: Sized {
    /// Compare two values in constant time
    fn secure_eq(&self, other: &Self) -> bool;

    /// Compare two values and return a constant-time choice
    fn secure_cmp(&self, other: &Self) -> Choice;
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_eq(&self, other: &Self) -> bool {
        timing_safe_compare(self, other, N)
    }

    fn secure_cmp(&self, other: &Self) -> Choice {
        timing_safe_compare_choice(self, other, N)
    }
}

impl SecureCompare for &[u8] {
    fn secure_eq(&self, other: &Self) -> bool {
        bool::from(self.secure_cmp(other))
    }

    // Lengths are public: a mismatch is rejected without reading content.
    fn secure_cmp(&self, other: &Self) -> Choice {
        if self.len() != other.len() {
            return Choice::from(0);
        }
        timing_safe_compare_choice(self, other, self.len())
    }
}

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Keep the compiler from moving memory accesses across this point
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }
}
