//! Command implementations for the bookshelf CLI

pub mod serve;
pub mod wait_db;

pub use serve::run_serve;
pub use wait_db::run_wait_db;
