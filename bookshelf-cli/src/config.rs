//! Environment loading for the bookshelf CLI
//!
//! A `.env` file in the current directory (or a parent) is loaded before
//! arguments are parsed. Variables already present in the process
//! environment are never overwritten.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use bookshelf_server::db::MySqlPool;
use bookshelf_server::{connect_with_retry, DbConfig, RetryPolicy};
use clap::Args;

/// Load `.env`, returning where it came from.
pub fn load_dotenv() -> Result<PathBuf, dotenvy::Error> {
    dotenvy::dotenv()
}

/// Log the outcome of [`load_dotenv`] once tracing is up.
pub fn report_dotenv(outcome: &Result<PathBuf, dotenvy::Error>) {
    match outcome {
        Ok(path) => tracing::info!("Loaded configuration from {}", path.display()),
        Err(e) if e.not_found() => {
            tracing::debug!("No .env file found, using environment variables only")
        }
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }
}

/// Connection arguments shared by every command that needs the database
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Seconds to wait between connection attempts (no attempt limit)
    #[arg(long, env = "DB_RETRY_DELAY_SECS", default_value_t = 5)]
    pub retry_delay: u64,
}

impl DbArgs {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(Duration::from_secs(self.retry_delay))
    }

    /// Read DB_* settings and wait until MySQL accepts a connection.
    pub async fn connect(&self) -> Result<MySqlPool> {
        let config = DbConfig::from_env()
            .context("Database settings incomplete. Set DB_HOST, DB_USER and DB_NAME (env or .env)")?;
        tracing::info!(?config, "Connecting to MySQL");

        Ok(connect_with_retry(&config, self.retry_policy()).await)
    }
}
