//! Error types for envkeys.

use thiserror::Error;

/// Top-level error returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Failures while producing random secrets.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// The platform's secure random generator is unavailable or failed.
    #[error("secure random source unavailable: {0}")]
    EntropySource(String),

    #[error("secret length must be at least one byte")]
    ZeroLength,
}

/// Failures while resolving a database descriptor from the environment.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("unknown environment: {0} (expected staging or production)")]
    UnknownEnvironment(String),

    #[error("missing required variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid integer for {var}: {value:?}")]
    InvalidInt { var: &'static str, value: String },

    #[error("invalid boolean for {var}: {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("pool min ({min}) exceeds pool max ({max})")]
    PoolBounds { min: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
