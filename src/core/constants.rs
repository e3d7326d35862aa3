//! Constants used throughout envkeys.
//!
//! Centralizes slot sizing and the variable names read for descriptors.

/// Default number of random bytes behind each secret.
pub const DEFAULT_BYTE_LENGTH: usize = 32;

/// Number of independent values in the `APP_KEYS` slot.
pub const APP_KEYS_COUNT: usize = 4;

/// Separator between the values of a multi-valued slot.
pub const LIST_SEPARATOR: char = ',';

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "ENVKEYS_LOG";

/// Placeholder printed in place of redacted credentials.
pub const REDACTED: &str = "********";

/// CA bundle used by production when `DATABASE_SSL_CA` is unset.
pub const DEFAULT_CA_PATH: &str = "/opt/app/certs/ca.crt";

/// Docker service name of the bundled staging database.
pub const STAGING_DEFAULT_HOST: &str = "strapiDB";

pub const DEFAULT_DATABASE_NAME: &str = "strapi";
pub const DEFAULT_DATABASE_USER: &str = "strapi";
pub const DEFAULT_DATABASE_PASSWORD: &str = "strapi";
pub const DEFAULT_DATABASE_PORT: u16 = 5432;
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_POOL_MIN: u32 = 0;
pub const DEFAULT_POOL_MAX: u32 = 10;

/// Fixed pool timings (milliseconds).
pub const POOL_ACQUIRE_TIMEOUT_MS: u64 = 600_000;
pub const POOL_CREATE_TIMEOUT_MS: u64 = 30_000;
pub const POOL_IDLE_TIMEOUT_MS: u64 = 20_000;
pub const POOL_REAP_INTERVAL_MS: u64 = 20_000;
pub const POOL_CREATE_RETRY_INTERVAL_MS: u64 = 200;

/// Variable names read when resolving database descriptors.
pub mod vars {
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const DATABASE_HOST: &str = "DATABASE_HOST";
    pub const DATABASE_PORT: &str = "DATABASE_PORT";
    pub const DATABASE_NAME: &str = "DATABASE_NAME";
    pub const DATABASE_USERNAME: &str = "DATABASE_USERNAME";
    pub const DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";
    pub const DATABASE_SSL: &str = "DATABASE_SSL";
    pub const DATABASE_SSL_CA: &str = "DATABASE_SSL_CA";
    pub const DATABASE_SSL_REJECT_UNAUTHORIZED: &str = "DATABASE_SSL_REJECT_UNAUTHORIZED";
    pub const DATABASE_SCHEMA: &str = "DATABASE_SCHEMA";
    pub const DATABASE_CONNECTION_TIMEOUT: &str = "DATABASE_CONNECTION_TIMEOUT";
    pub const DATABASE_DEBUG: &str = "DATABASE_DEBUG";
    pub const DATABASE_POOL_MIN: &str = "DATABASE_POOL_MIN";
    pub const DATABASE_POOL_MAX: &str = "DATABASE_POOL_MAX";

    /// Every variable the descriptors consult.
    pub const ALL: &[&str] = &[
        DATABASE_URL,
        DATABASE_HOST,
        DATABASE_PORT,
        DATABASE_NAME,
        DATABASE_USERNAME,
        DATABASE_PASSWORD,
        DATABASE_SSL,
        DATABASE_SSL_CA,
        DATABASE_SSL_REJECT_UNAUTHORIZED,
        DATABASE_SCHEMA,
        DATABASE_CONNECTION_TIMEOUT,
        DATABASE_DEBUG,
        DATABASE_POOL_MIN,
        DATABASE_POOL_MAX,
    ];
}
