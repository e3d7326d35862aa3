//! Database command.
//!
//! Resolves a per-environment database descriptor from the process
//! environment and prints it as TOML or JSON.

use crate::cli::output;
use crate::core::database::{DatabaseDescriptor, Environment};
use crate::core::env::ProcessEnv;
use crate::error::Result;

/// Print the descriptor for `environment`.
pub fn execute(environment: Environment, json: bool, reveal: bool) -> Result<()> {
    let descriptor = DatabaseDescriptor::resolve(environment, &ProcessEnv)?;
    let descriptor = if reveal {
        descriptor
    } else {
        descriptor.redacted()
    };

    output::data(&render(&descriptor, json)?);
    Ok(())
}

/// Serialize a descriptor in the requested format.
pub fn render(descriptor: &DatabaseDescriptor, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(descriptor)?)
    } else {
        Ok(toml::to_string_pretty(descriptor)?)
    }
}
