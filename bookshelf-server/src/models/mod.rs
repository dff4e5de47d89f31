//! Domain models
//!
//! Write payloads are deliberately unvalidated: every field is optional
//! and the database is the only judge of what it accepts.

pub mod book;

pub use book::{Book, BookInput};
