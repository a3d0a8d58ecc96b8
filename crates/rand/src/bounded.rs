//! Unbiased sampling over `[0, max_bounds)`
//!
//! Reducing a full-width draw with `% max_bounds` is biased whenever
//! `max_bounds` does not divide 2^32 (or 2^64): the last, incomplete group of
//! `max_bounds` values maps extra draws onto the low remainders. The samplers
//! here compute the last value of the last complete group, `max_usable`, and
//! redraw anything above it.
//!
//! The incomplete group always covers less than half of the draw range, so
//! twenty consecutive rejections happen with probability below 2^-20 even for
//! the worst bound. After [`MAX_REDRAWS`] redraws the current value is reduced
//! anyway, which keeps the running time bounded.

use hygiene_api::error::RandomResult;
use hygiene_api::validate;

use crate::csprng::Csprng;
use crate::source::EntropySource;

/// Redraws attempted before a draw from the incomplete group is accepted
pub const MAX_REDRAWS: usize = 20;

/// Largest 32-bit draw that still belongs to a complete group of `max_bounds`
///
/// Computed in 64 bits so that a `max_bounds` dividing 2^32 yields `u32::MAX`.
#[inline]
pub(crate) fn max_usable_u32(max_bounds: u32) -> u32 {
    u32::MAX - ((u64::from(u32::MAX) + 1) % u64::from(max_bounds)) as u32
}

/// Largest 64-bit draw that still belongs to a complete group of `max_bounds`
#[inline]
pub(crate) fn max_usable_u64(max_bounds: u64) -> u64 {
    u64::MAX - ((u128::from(u64::MAX) + 1) % u128::from(max_bounds)) as u64
}

impl<S: EntropySource> Csprng<S> {
    /// Uniform `u32` in `[0, max_bounds)`
    ///
    /// # Panics
    ///
    /// Panics if `max_bounds` is zero; the range would be empty.
    pub fn uniform_bounded_u32(&mut self, max_bounds: u32) -> u32 {
        assert!(max_bounds > 0, "uniform_bounded_u32: max_bounds must be non-zero");

        let max_usable = max_usable_u32(max_bounds);
        let mut value: u32 = self.random_scalar();
        let mut redraws = 0;
        while value > max_usable && redraws < MAX_REDRAWS {
            value = self.random_scalar();
            redraws += 1;
        }
        if value > max_usable {
            log::debug!("uniform_bounded_u32({max_bounds}): redraw cap reached, accepting biased draw");
        }

        value % max_bounds
    }

    /// Uniform `u64` in `[0, max_bounds)`
    ///
    /// Same algorithm as [`uniform_bounded_u32`](Self::uniform_bounded_u32)
    /// one width class up.
    ///
    /// # Panics
    ///
    /// Panics if `max_bounds` is zero.
    pub fn uniform_bounded_u64(&mut self, max_bounds: u64) -> u64 {
        assert!(max_bounds > 0, "uniform_bounded_u64: max_bounds must be non-zero");

        let max_usable = max_usable_u64(max_bounds);
        let mut value: u64 = self.random_scalar();
        let mut redraws = 0;
        while value > max_usable && redraws < MAX_REDRAWS {
            value = self.random_scalar();
            redraws += 1;
        }
        if value > max_usable {
            log::debug!("uniform_bounded_u64({max_bounds}): redraw cap reached, accepting biased draw");
        }

        value % max_bounds
    }

    /// Uniform `usize` in `[0, max_bounds)`
    ///
    /// Bounds that fit in 32 bits use the 32-bit sampler so that small
    /// ranges only consume four bytes per draw.
    ///
    /// # Panics
    ///
    /// Panics if `max_bounds` is zero.
    pub fn uniform_bounded_usize(&mut self, max_bounds: usize) -> usize {
        match u32::try_from(max_bounds) {
            Ok(bound) => self.uniform_bounded_u32(bound) as usize,
            Err(_) => self.uniform_bounded_u64(max_bounds as u64) as usize,
        }
    }

    /// Checked variant of [`uniform_bounded_u32`](Self::uniform_bounded_u32)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` when `max_bounds` is zero.
    pub fn try_uniform_bounded_u32(&mut self, max_bounds: u32) -> RandomResult<u32> {
        validate::parameter(max_bounds > 0, "uniform_bounded_u32", "max_bounds must be non-zero")?;
        Ok(self.uniform_bounded_u32(max_bounds))
    }

    /// Checked variant of [`uniform_bounded_u64`](Self::uniform_bounded_u64)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` when `max_bounds` is zero.
    pub fn try_uniform_bounded_u64(&mut self, max_bounds: u64) -> RandomResult<u64> {
        validate::parameter(max_bounds > 0, "uniform_bounded_u64", "max_bounds must be non-zero")?;
        Ok(self.uniform_bounded_u64(max_bounds))
    }
}

/// Uniform `u32` in `[0, max_bounds)` from the operating system CSPRNG
///
/// # Panics
///
/// Panics if `max_bounds` is zero.
pub fn uniform_bounded_u32(max_bounds: u32) -> u32 {
    Csprng::os().uniform_bounded_u32(max_bounds)
}

/// Uniform `u64` in `[0, max_bounds)` from the operating system CSPRNG
///
/// # Panics
///
/// Panics if `max_bounds` is zero.
pub fn uniform_bounded_u64(max_bounds: u64) -> u64 {
    Csprng::os().uniform_bounded_u64(max_bounds)
}

/// Uniform `usize` in `[0, max_bounds)` from the operating system CSPRNG
///
/// # Panics
///
/// Panics if `max_bounds` is zero.
pub fn uniform_bounded_usize(max_bounds: usize) -> usize {
    Csprng::os().uniform_bounded_usize(max_bounds)
}
