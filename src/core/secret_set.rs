//! The fixed set of secrets a deployment needs.
//!
//! Slots are drawn in order and rendered as `NAME=value` env lines.

use std::fmt;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{APP_KEYS_COUNT, LIST_SEPARATOR};
use crate::core::entropy::EntropySource;
use crate::core::secret::generate_secret_from;
use crate::error::GenerateError;

/// A named slot in the deployment's environment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    AppKeys,
    ApiTokenSalt,
    AdminJwtSecret,
    TransferTokenSalt,
    JwtSecret,
}

impl Slot {
    /// Every slot, in output order.
    pub const ALL: [Slot; 5] = [
        Slot::AppKeys,
        Slot::ApiTokenSalt,
        Slot::AdminJwtSecret,
        Slot::TransferTokenSalt,
        Slot::JwtSecret,
    ];

    /// Environment variable name for this slot.
    pub fn env_name(&self) -> &'static str {
        match self {
            Slot::AppKeys => "APP_KEYS",
            Slot::ApiTokenSalt => "API_TOKEN_SALT",
            Slot::AdminJwtSecret => "ADMIN_JWT_SECRET",
            Slot::TransferTokenSalt => "TRANSFER_TOKEN_SALT",
            Slot::JwtSecret => "JWT_SECRET",
        }
    }

    /// Number of independent values this slot holds.
    pub fn arity(&self) -> usize {
        match self {
            Slot::AppKeys => APP_KEYS_COUNT,
            _ => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_name())
    }
}

/// One fully generated secret set. Values are wiped on drop.
pub struct SecretSet {
    entries: Vec<(Slot, Vec<Zeroizing<String>>)>,
}

impl SecretSet {
    /// Draw every slot from `source`.
    ///
    /// Either every value is produced or an error is returned; a partial set
    /// never escapes.
    ///
    /// # Errors
    ///
    /// Returns the first `GenerateError` hit while drawing.
    pub fn generate_from<S: EntropySource>(
        source: &mut S,
        byte_length: usize,
    ) -> Result<Self, GenerateError> {
        let mut entries = Vec::with_capacity(Slot::ALL.len());

        for slot in Slot::ALL {
            let mut values = Vec::with_capacity(slot.arity());
            for _ in 0..slot.arity() {
                values.push(Zeroizing::new(generate_secret_from(source, byte_length)?));
            }
            debug!(slot = %slot, count = values.len(), "slot generated");
            entries.push((slot, values));
        }

        Ok(Self { entries })
    }

    /// Values generated for `slot`.
    pub fn values(&self, slot: Slot) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(s, _)| *s == slot)
            .flat_map(|(_, values)| values.iter().map(|v| v.as_str()))
    }

    /// Every generated value across all slots, in output order.
    pub fn all_values(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, values)| values.iter().map(|v| v.as_str()))
    }

    /// Total number of random values in the set.
    pub fn value_count(&self) -> usize {
        self.entries.iter().map(|(_, values)| values.len()).sum()
    }

    /// Render as env-file lines, one per slot, each newline-terminated.
    pub fn render(&self) -> Zeroizing<String> {
        let mut out = Zeroizing::new(String::new());

        for (slot, values) in &self.entries {
            out.push_str(slot.env_name());
            out.push('=');
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    out.push(LIST_SEPARATOR);
                }
                out.push_str(value);
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Debug for SecretSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretSet")
            .field("slots", &self.entries.len())
            .field("values", &self.value_count())
            .finish_non_exhaustive()
    }
}
