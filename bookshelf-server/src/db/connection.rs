//! Connection manager
//!
//! Owns the single MySQL connection handle. The first connection is
//! retried indefinitely on a fixed delay so the process can start
//! before the database is reachable.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sqlx::mysql::{MySqlConnection, MySqlPoolOptions};
use sqlx::{Connection, MySqlPool};

use crate::config::{DbConfig, RetryPolicy};

/// One connection, shared by every handler.
const MAX_CONNECTIONS: u32 = 1;

/// How long a request may wait for the connection. Effectively unbounded:
/// queries queue behind a slow one instead of failing. Not `Duration::MAX`,
/// sqlx adds it to `Instant::now()`.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// Run `attempt` until it succeeds, sleeping `policy.delay` after each failure.
///
/// There is no attempt limit and the delay never grows.
pub async fn retry_forever<T, E, F, Fut>(policy: RetryPolicy, mut attempt: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        match attempt().await {
            Ok(value) => return value,
            Err(e) => {
                tracing::warn!(
                    attempt = attempts,
                    error = %e,
                    "MySQL not ready, retrying in {}s...",
                    policy.delay.as_secs()
                );
                tokio::time::sleep(policy.delay).await;
            }
        }
    }
}

/// Pool settings for the shared handle: one connection, kept open,
/// with no practical limit on how long a request queues for it.
fn pool_options() -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .min_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Open the connection handle, waiting as long as it takes.
///
/// Each attempt is a direct connection: pool acquisition retries
/// internally until its own timeout, which would stretch the fixed delay.
/// Once a trial connection succeeds it is closed and the pool opens its connection.
///
/// # Example
///
/// ```ignore
/// let config = DbConfig::from_env()?;
/// let pool = connect_with_retry(&config, RetryPolicy::default()).await;
/// ```
pub async fn connect_with_retry(config: &DbConfig, policy: RetryPolicy) -> MySqlPool {
    let options = config.connect_options();

    let first = retry_forever(policy, || MySqlConnection::connect_with(&options)).await;
    if let Err(e) = first.close().await {
        tracing::debug!(error = %e, "closing trial connection failed");
    }

    let pool = pool_options().connect_lazy_with(options);

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        "MySQL connected successfully"
    );
    pool
}
