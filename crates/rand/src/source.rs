//! Entropy sources
//!
//! The OS CSPRNG is process-wide state owned by the operating system. It is
//! modelled here as an injected dependency so that the sampling code never
//! names a platform call directly.

use hygiene_api::Error;
use rand::{CryptoRng, RngCore};
use thiserror::Error as ThisError;

use crate::os;

/// Failure reported by a single call into an entropy source
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum SourceError {
    /// The call was interrupted before producing any bytes; retry it
    #[error("entropy source call interrupted")]
    Interrupted,

    /// The source reported a hard failure; `code` is the platform error code
    #[error("entropy source failed (os error {code})")]
    Failed { code: i32 },
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Error::random("entropy source", err.to_string())
    }
}

/// Trait for cryptographically secure byte sources
///
/// A single call may fill less than `dest.len()` bytes. Callers loop until
/// the buffer is complete; see [`Csprng::try_fill_bytes`](crate::Csprng::try_fill_bytes).
pub trait EntropySource {
    /// Write random bytes to the front of `dest` and return how many were written
    ///
    /// # Errors
    ///
    /// [`SourceError::Interrupted`] is transient. [`SourceError::Failed`] is
    /// not retried.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<usize, SourceError>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<usize, SourceError> {
        (**self).try_fill(dest)
    }
}

/// The operating system CSPRNG
///
/// Zero-sized handle; the platform owns the actual generator state and its
/// lifecycle. The binding is chosen at build time:
/// - Linux, Android: `getrandom(2)`
/// - Apple platforms and the BSDs: `arc4random_buf(3)`
/// - Windows: `BCryptGenRandom` with the system preferred RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<usize, SourceError> {
        os::sys_random(dest)
    }
}

/// Adapter turning any `rand` CSPRNG into an [`EntropySource`]
///
/// Intended for reproducible tests, e.g. a seeded `ChaCha20Rng`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: RngCore + CryptoRng> EntropySource for RngSource<R> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<usize, SourceError> {
        self.0.try_fill_bytes(dest).map_err(|e| SourceError::Failed {
            code: e.code().map_or(-1, |c| c.get() as i32),
        })?;
        Ok(dest.len())
    }
}
