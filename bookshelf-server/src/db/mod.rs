//! Database layer - connection manager and repositories
//!
//! # Design Principles
//!
//! - One persistent connection (pool capped at 1), reopened by sqlx on drop
//! - Initial connect retries forever on a fixed delay
//! - List operations use a single INNER JOIN - no N+1 queries
//! - No transactions: writes and their read-back are separate statements

pub mod connection;
pub mod repos;

pub use connection::{connect_with_retry, retry_forever};
pub use repos::*;
pub use sqlx::MySqlPool;
