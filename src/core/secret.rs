//! Single secret generation.
//!
//! A secret is `byte_length` random bytes rendered as standard base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroizing;

use crate::core::entropy::{EntropySource, OsEntropy};
use crate::error::GenerateError;

/// Generate one base64 secret from the operating system's CSPRNG.
///
/// # Errors
///
/// Returns `GenerateError::ZeroLength` for a zero length, or
/// `GenerateError::EntropySource` if the random source is unavailable.
pub fn generate_secret(byte_length: usize) -> Result<String, GenerateError> {
    generate_secret_from(&mut OsEntropy, byte_length)
}

/// Generate one base64 secret from the given source.
///
/// The raw bytes are wiped once encoded.
pub fn generate_secret_from<S: EntropySource>(
    source: &mut S,
    byte_length: usize,
) -> Result<String, GenerateError> {
    if byte_length == 0 {
        return Err(GenerateError::ZeroLength);
    }

    let mut raw = Zeroizing::new(vec![0u8; byte_length]);
    source.fill(&mut raw)?;

    Ok(STANDARD.encode(raw.as_slice()))
}
