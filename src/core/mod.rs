//! Core library components.
//!
//! Secret generation and the per-environment database descriptors, free of
//! any terminal concerns.

pub mod constants;
pub mod database;
pub mod entropy;
pub mod env;
pub mod generator;
pub mod secret;
pub mod secret_set;
