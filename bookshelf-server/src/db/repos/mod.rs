//! Repository implementations for database access
//!
//! Handlers talk to the [`BookStore`] trait; [`BookRepo`] is the MySQL
//! implementation.

pub mod books;
#[cfg(test)]
pub mod memory;

pub use books::{BookRepo, BookStore, DbError};
