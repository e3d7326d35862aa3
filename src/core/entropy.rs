//! Sources of cryptographically secure random bytes.
//!
//! Secret generation draws through the [`EntropySource`] trait so the
//! operating system generator can be swapped for a deterministic or failing
//! source in tests.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::error::GenerateError;

/// A provider of secure random bytes.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::EntropySource` if the source cannot supply
    /// bytes. Callers treat this as fatal.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError>;
}

/// The operating system's CSPRNG (`getrandom` under the hood).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            debug!(error = %e, "os random source failed");
            GenerateError::EntropySource(e.to_string())
        })
    }
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), GenerateError> {
        (**self).fill(dest)
    }
}
