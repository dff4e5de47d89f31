//! Database configuration - environment loading
//!
//! Configuration is loaded from environment variables:
//! - `DB_HOST`: MySQL host (required)
//! - `DB_PORT`: MySQL port (default: 3306)
//! - `DB_USER`: MySQL user (required)
//! - `DB_PASSWORD`: MySQL password (default: empty)
//! - `DB_NAME`: database name (required)

use std::fmt;
use std::time::Duration;

use sqlx::mysql::MySqlConnectOptions;

/// Default MySQL port
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Fixed delay between connection attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Connection settings for the book database
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        let port = match lookup("DB_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "DB_PORT",
                value: raw,
            })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            host: required("DB_HOST")?,
            port,
            user: required("DB_USER")?,
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database: required("DB_NAME")?,
        })
    }

    /// sqlx connect options for this config.
    ///
    /// Built field by field so passwords never need URL escaping.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}

/// How the connection manager waits between attempts.
///
/// The delay is fixed: there is no backoff growth and no attempt limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_DELAY)
    }
}
