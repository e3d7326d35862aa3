//! Per-environment database connection descriptors.
//!
//! A descriptor is the data the CMS environment loader consumes for its
//! PostgreSQL connection. Nothing here opens a connection.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

use crate::core::constants::{self, vars};
use crate::core::env::Env;
use crate::error::{DescriptorError, Result};

/// Deployment environment a descriptor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Bundled PostgreSQL from docker-compose.
    Staging,
    /// Managed PostgreSQL reached through `DATABASE_URL`.
    Production,
}

impl FromStr for Environment {
    type Err = DescriptorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(DescriptorError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Staging => f.write_str("staging"),
            Self::Production => f.write_str("production"),
        }
    }
}

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Endpoint {
    ConnectionString {
        url: String,
    },
    Params {
        host: String,
        port: u16,
        database: String,
        user: String,
        password: String,
    },
}

/// Source of the CA bundle used to verify the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum CaCertificate {
    /// PEM text supplied directly through `DATABASE_SSL_CA`.
    Inline { pem: String },
    /// Bundle on disk, read by the loader at startup.
    File { path: PathBuf },
}

/// TLS settings for the connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Ssl {
    Disabled,
    Enabled {
        #[serde(skip_serializing_if = "Option::is_none")]
        ca: Option<CaCertificate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reject_unauthorized: Option<bool>,
    },
}

impl Ssl {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Ssl::Enabled { .. })
    }
}

/// Connection pool sizing and timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    pub min: u32,
    pub max: u32,
    pub acquire_timeout_ms: u64,
    pub create_timeout_ms: u64,
    pub idle_timeout_ms: u64,
    pub reap_interval_ms: u64,
    pub create_retry_interval_ms: u64,
}

impl Pool {
    fn resolve(env: &impl Env) -> Result<Self> {
        let min = env.uint_or(vars::DATABASE_POOL_MIN, constants::DEFAULT_POOL_MIN)?;
        let max = env.uint_or(vars::DATABASE_POOL_MAX, constants::DEFAULT_POOL_MAX)?;

        if min > max {
            return Err(DescriptorError::PoolBounds { min, max }.into());
        }

        Ok(Self {
            min,
            max,
            acquire_timeout_ms: constants::POOL_ACQUIRE_TIMEOUT_MS,
            create_timeout_ms: constants::POOL_CREATE_TIMEOUT_MS,
            idle_timeout_ms: constants::POOL_IDLE_TIMEOUT_MS,
            reap_interval_ms: constants::POOL_REAP_INTERVAL_MS,
            create_retry_interval_ms: constants::POOL_CREATE_RETRY_INTERVAL_MS,
        })
    }
}

/// Full database descriptor for one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseDescriptor {
    pub environment: Environment,
    pub client: String,
    pub schema: String,
    pub acquire_connection_timeout_ms: u64,
    pub debug: bool,
    pub endpoint: Endpoint,
    pub ssl: Ssl,
    pub pool: Pool,
}

impl DatabaseDescriptor {
    /// Resolve the descriptor for `environment` from `env`.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorError` for malformed numbers or booleans, an
    /// inverted pool range, or a missing `DATABASE_URL` in production.
    pub fn resolve(environment: Environment, env: &impl Env) -> Result<Self> {
        debug!(%environment, "resolving database descriptor");

        let (endpoint, ssl) = match environment {
            Environment::Staging => (staging_endpoint(env)?, staging_ssl(env)?),
            Environment::Production => (production_endpoint(env)?, production_ssl(env)?),
        };

        let descriptor = Self {
            environment,
            client: "postgres".to_string(),
            schema: env.string_or(vars::DATABASE_SCHEMA, constants::DEFAULT_SCHEMA),
            acquire_connection_timeout_ms: env.uint_or(
                vars::DATABASE_CONNECTION_TIMEOUT,
                constants::DEFAULT_CONNECTION_TIMEOUT_MS,
            )?,
            debug: env.bool_or(vars::DATABASE_DEBUG, false)?,
            endpoint,
            ssl,
            pool: Pool::resolve(env)?,
        };

        debug!(
            ssl = descriptor.ssl.is_enabled(),
            pool_max = descriptor.pool.max,
            "database descriptor resolved"
        );

        Ok(descriptor)
    }

    /// Copy with credentials masked, safe to print.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        match &mut copy.endpoint {
            Endpoint::ConnectionString { url } => *url = constants::REDACTED.to_string(),
            Endpoint::Params { password, .. } => *password = constants::REDACTED.to_string(),
        }
        copy
    }
}

fn staging_endpoint(env: &impl Env) -> Result<Endpoint> {
    Ok(Endpoint::Params {
        host: env.string_or(vars::DATABASE_HOST, constants::STAGING_DEFAULT_HOST),
        port: env.uint_or(vars::DATABASE_PORT, constants::DEFAULT_DATABASE_PORT)?,
        database: env.string_or(vars::DATABASE_NAME, constants::DEFAULT_DATABASE_NAME),
        user: env.string_or(vars::DATABASE_USERNAME, constants::DEFAULT_DATABASE_USER),
        password: env.string_or(vars::DATABASE_PASSWORD, constants::DEFAULT_DATABASE_PASSWORD),
    })
}

fn staging_ssl(env: &impl Env) -> Result<Ssl> {
    // Same docker network as the app, so no CA and no verification knobs
    if env.bool_or(vars::DATABASE_SSL, false)? {
        Ok(Ssl::Enabled {
            ca: None,
            reject_unauthorized: None,
        })
    } else {
        Ok(Ssl::Disabled)
    }
}

fn production_endpoint(env: &impl Env) -> Result<Endpoint> {
    let url = env
        .non_blank(vars::DATABASE_URL)
        .ok_or(DescriptorError::MissingVar(vars::DATABASE_URL))?;

    Ok(Endpoint::ConnectionString { url })
}

fn production_ssl(env: &impl Env) -> Result<Ssl> {
    if !env.bool_or(vars::DATABASE_SSL, true)? {
        return Ok(Ssl::Disabled);
    }

    let ca = match env.non_blank(vars::DATABASE_SSL_CA) {
        Some(pem) => CaCertificate::Inline { pem },
        None => CaCertificate::File {
            path: PathBuf::from(constants::DEFAULT_CA_PATH),
        },
    };

    Ok(Ssl::Enabled {
        ca: Some(ca),
        reject_unauthorized: Some(env.bool_or(vars::DATABASE_SSL_REJECT_UNAUTHORIZED, false)?),
    })
}
