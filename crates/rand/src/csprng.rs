//! Buffer filling and fixed-width draws

use hygiene_api::error::RandomResult;
use hygiene_api::ResultExt;
use rand::{CryptoRng, RngCore};

use crate::scalar::RandomScalar;
use crate::source::{EntropySource, OsEntropy, SourceError};

/// Handle over an entropy source
///
/// `Csprng` holds no generator state of its own. Every operation is a
/// post-processing step over bytes pulled from `S`.
#[derive(Debug, Default, Clone)]
pub struct Csprng<S = OsEntropy> {
    source: S,
}

impl Csprng<OsEntropy> {
    /// Handle backed by the operating system CSPRNG
    pub const fn os() -> Self {
        Self { source: OsEntropy }
    }
}

impl<S: EntropySource> Csprng<S> {
    /// Wrap an entropy source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Give the source back
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Fill `buffer` completely, reporting a hard source failure as an error
    ///
    /// Short reads resume where they stopped and interruptions are retried;
    /// neither is ever surfaced. A zero-length buffer returns without calling
    /// the source.
    ///
    /// # Errors
    ///
    /// Returns `Error::RandomGeneration` if the source reports
    /// [`SourceError::Failed`]. The buffer contents are then unspecified.
    pub fn try_fill_bytes(&mut self, buffer: &mut [u8]) -> RandomResult<()> {
        let mut filled = 0;

        while filled < buffer.len() {
            let remaining = buffer.len() - filled;
            match self.source.try_fill(&mut buffer[filled..]) {
                Ok(n) => {
                    if n < remaining {
                        log::trace!("entropy source returned {n} of {remaining} bytes, resuming");
                    }
                    filled += n.min(remaining);
                }
                Err(SourceError::Interrupted) => {
                    log::trace!("entropy source interrupted, retrying");
                }
                Err(err) => return Err(err).with_context("csprng fill"),
            }
        }

        Ok(())
    }

    /// Fill `buffer` completely or terminate the process
    ///
    /// Callers must never continue with missing or predictable bytes, so an
    /// unrecoverable source failure aborts after logging it.
    pub fn fill_bytes(&mut self, buffer: &mut [u8]) {
        if let Err(err) = self.try_fill_bytes(buffer) {
            log::error!("unrecoverable entropy source failure, aborting: {err}");
            std::process::abort();
        }
    }

    /// Draw one fixed-width value
    pub fn random_scalar<T: RandomScalar>(&mut self) -> T {
        let mut bytes = T::zeroed_bytes();
        self.fill_bytes(bytes.as_mut());
        T::from_random_bytes(bytes)
    }
}

impl<S: EntropySource> RngCore for Csprng<S> {
    fn next_u32(&mut self) -> u32 {
        self.random_scalar()
    }

    fn next_u64(&mut self) -> u64 {
        self.random_scalar()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Csprng::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        Csprng::try_fill_bytes(self, dest).map_err(rand::Error::new)
    }
}

impl<S: EntropySource> CryptoRng for Csprng<S> {}

/// Fill `buffer` from the operating system CSPRNG
///
/// Aborts the process if the OS reports an unrecoverable failure.
pub fn random_bytes(buffer: &mut [u8]) {
    Csprng::os().fill_bytes(buffer)
}

/// Draw one fixed-width value from the operating system CSPRNG
pub fn random_scalar<T: RandomScalar>() -> T {
    Csprng::os().random_scalar()
}
