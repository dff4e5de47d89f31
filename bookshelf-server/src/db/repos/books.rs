//! Book repository
//!
//! - list: single INNER JOIN with author (books with a dangling author are dropped)
//! - create/update/delete: one parameterized statement each, no existence checks

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use crate::models::{Book, BookInput};

/// Shared read query: every book column aliased to its field name,
/// author columns flattened in.
const LIST_BOOKS: &str = r#"
SELECT
    b.id AS id,
    b.title AS title,
    b.releaseDate AS releaseDate,
    b.description AS description,
    b.pages AS pages,
    b.createdAt AS createdAt,
    b.updatedAt AS updatedAt,
    a.id AS authorId,
    a.name AS name,
    a.birthday AS birthday,
    a.bio AS bio
FROM book b
INNER JOIN author a ON b.authorId = a.id
ORDER BY b.id
"#;

const INSERT_BOOK: &str = r#"
INSERT INTO book (title, releaseDate, description, pages, authorId, createdAt, updatedAt)
VALUES (?, ?, ?, ?, ?, ?, ?)
"#;

const UPDATE_BOOK: &str = r#"
UPDATE book
SET title = ?, releaseDate = ?, description = ?, pages = ?, authorId = ?,
    updatedAt = CURRENT_TIMESTAMP
WHERE id = ?
"#;

const DELETE_BOOK: &str = "DELETE FROM book WHERE id = ?";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage operations behind the book endpoints.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books whose author exists, joined with that author.
    async fn list(&self) -> Result<Vec<Book>, DbError>;

    /// Insert a book stamped with `now` for both timestamps. Returns the new id.
    async fn create(&self, input: &BookInput, now: DateTime<Utc>) -> Result<u64, DbError>;

    /// Overwrite every mutable field of `id`. Returns rows affected (may be 0).
    async fn update(&self, id: i64, input: &BookInput) -> Result<u64, DbError>;

    /// Remove `id`. Returns rows affected (may be 0).
    async fn delete(&self, id: i64) -> Result<u64, DbError>;
}

/// MySQL-backed book repository
#[derive(Clone)]
pub struct BookRepo {
    pool: MySqlPool,
}

impl BookRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BookRepo {
    async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as::<_, Book>(LIST_BOOKS)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    async fn create(&self, input: &BookInput, now: DateTime<Utc>) -> Result<u64, DbError> {
        let result = sqlx::query(INSERT_BOOK)
            .bind(input.title.as_deref())
            .bind(input.release_date)
            .bind(input.description.as_deref())
            .bind(input.pages)
            .bind(input.author_id)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_id())
    }

    async fn update(&self, id: i64, input: &BookInput) -> Result<u64, DbError> {
        let result = sqlx::query(UPDATE_BOOK)
            .bind(input.title.as_deref())
            .bind(input.release_date)
            .bind(input.description.as_deref())
            .bind(input.pages)
            .bind(input.author_id)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query(DELETE_BOOK)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
