//! In-memory book store for handler tests
//!
//! Mirrors the MySQL repository: inner-join reads, no existence checks
//! on writes, `updatedAt` bumped on update.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use super::{BookStore, DbError};
use crate::models::{Book, BookInput};

#[derive(Debug, Clone)]
pub struct AuthorRow {
    pub name: String,
    pub birthday: Option<NaiveDate>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone)]
struct BookRow {
    title: String,
    release_date: Option<NaiveDate>,
    description: Option<String>,
    pages: Option<i32>,
    author_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct Tables {
    authors: BTreeMap<i64, AuthorRow>,
    books: BTreeMap<i64, BookRow>,
    next_id: i64,
}

/// Failure switches for exercising error paths
#[derive(Default)]
pub struct Faults {
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

#[derive(Default)]
pub struct MemoryBookStore {
    tables: Mutex<Tables>,
    pub faults: Faults,
}

fn injected() -> DbError {
    DbError::Sqlx(sqlx::Error::Protocol("injected failure".into()))
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_author(&self, id: i64, name: &str) {
        self.tables.lock().unwrap().authors.insert(
            id,
            AuthorRow {
                name: name.to_owned(),
                birthday: NaiveDate::from_ymd_opt(1920, 10, 8),
                bio: Some(format!("{} bio", name)),
            },
        );
    }

    /// Also enforces `book.title NOT NULL` from the reference schema.
    fn check_write(&self, input: &BookInput) -> Result<(), DbError> {
        if self.faults.fail_writes.load(Ordering::SeqCst) {
            return Err(injected());
        }
        if input.title.is_none() {
            return Err(DbError::Sqlx(sqlx::Error::Protocol(
                "Column 'title' cannot be null".into(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn list(&self) -> Result<Vec<Book>, DbError> {
        if self.faults.fail_reads.load(Ordering::SeqCst) {
            return Err(injected());
        }
        let tables = self.tables.lock().unwrap();
        let books = tables
            .books
            .iter()
            .filter_map(|(id, row)| {
                let author_id = row.author_id?;
                let author = tables.authors.get(&author_id)?;
                Some(Book {
                    id: *id,
                    title: row.title.clone(),
                    release_date: row.release_date,
                    description: row.description.clone(),
                    pages: row.pages,
                    created_at: row.created_at,
                    updated_at: row.updated_at,
                    author_id,
                    name: author.name.clone(),
                    birthday: author.birthday,
                    bio: author.bio.clone(),
                })
            })
            .collect();
        Ok(books)
    }

    async fn create(&self, input: &BookInput, now: DateTime<Utc>) -> Result<u64, DbError> {
        self.check_write(input)?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let id = tables.next_id;
        tables.books.insert(
            id,
            BookRow {
                title: input.title.clone().unwrap_or_default(),
                release_date: input.release_date,
                description: input.description.clone(),
                pages: input.pages,
                author_id: input.author_id,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id as u64)
    }

    async fn update(&self, id: i64, input: &BookInput) -> Result<u64, DbError> {
        self.check_write(input)?;
        let mut tables = self.tables.lock().unwrap();
        let Some(row) = tables.books.get_mut(&id) else {
            return Ok(0);
        };
        row.title = input.title.clone().unwrap_or_default();
        row.release_date = input.release_date;
        row.description = input.description.clone();
        row.pages = input.pages;
        row.author_id = input.author_id;
        // Strictly later than the previous stamp even on a coarse clock
        row.updated_at = Utc::now().max(row.updated_at + chrono::Duration::seconds(1));
        Ok(1)
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        if self.faults.fail_writes.load(Ordering::SeqCst) {
            return Err(injected());
        }
        let removed = self.tables.lock().unwrap().books.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
