//! Environment variable lookup with typed parsing.
//!
//! Descriptors read through the [`Env`] trait so tests can resolve against
//! a plain map instead of the process environment.

use std::collections::BTreeMap;

use crate::error::DescriptorError;

/// A read-only view of environment variables.
pub trait Env {
    /// Value of `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `None` if unset or blank.
    fn non_blank(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    /// Value of `key`, falling back to `default` when unset or blank.
    fn string_or(&self, key: &str, default: &str) -> String {
        self.non_blank(key).unwrap_or_else(|| default.to_string())
    }

    /// Value of `key` parsed as an unsigned integer, or `default` when unset or blank.
    fn uint_or<T>(&self, key: &'static str, default: T) -> Result<T, DescriptorError>
    where
        T: std::str::FromStr,
    {
        match self.non_blank(key) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| DescriptorError::InvalidInt { var: key, value: raw }),
        }
    }

    /// Value of `key` parsed as a boolean, or `default` when unset or blank.
    ///
    /// Accepts `true/false`, `1/0` and `yes/no`, case-insensitive.
    fn bool_or(&self, key: &'static str, default: bool) -> Result<bool, DescriptorError> {
        match self.non_blank(key) {
            None => Ok(default),
            Some(raw) => parse_bool(&raw)
                .ok_or(DescriptorError::InvalidBool { var: key, value: raw }),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// The current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Env for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}
