//! Generate command.
//!
//! Prints a fresh secret set to stdout, all lines or none.

use tracing::debug;

use crate::core::generator;
use crate::error::Result;

/// Print a freshly generated secret set.
pub fn execute() -> Result<()> {
    debug!("generating secret set");
    generator::run()
}
