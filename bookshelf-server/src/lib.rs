//! bookshelf-server: HTTP server for the book catalogue
//!
//! Exposes list/create/update/delete over books joined with their
//! author, backed by a single MySQL connection that is established
//! with retry-on-failure.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{DbConfig, RetryPolicy};
pub use db::{connect_with_retry, BookRepo, BookStore, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use models::{Book, BookInput};
