//! Produce a full secret set and write it out in one piece.

use std::io::Write;
use tracing::debug;

use crate::core::constants::DEFAULT_BYTE_LENGTH;
use crate::core::entropy::{EntropySource, OsEntropy};
use crate::core::secret_set::SecretSet;
use crate::error::Result;

/// Generate the deployment secrets from the OS CSPRNG and print them to stdout.
///
/// # Errors
///
/// Returns an error if the random source fails (nothing is printed) or if
/// stdout cannot be written.
pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with(&mut OsEntropy, &mut handle)
}

/// Generate the deployment secrets from `source` and write them to `out`.
///
/// Every value is drawn and rendered before the first byte reaches `out`,
/// so an entropy failure leaves `out` untouched.
pub fn run_with<S: EntropySource, W: Write>(source: &mut S, out: &mut W) -> Result<()> {
    let set = SecretSet::generate_from(source, DEFAULT_BYTE_LENGTH)?;
    debug!(values = set.value_count(), "secret set generated");

    let rendered = set.render();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;

    Ok(())
}
