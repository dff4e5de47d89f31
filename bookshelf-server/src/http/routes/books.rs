//! Book endpoints
//!
//! Every write is followed by a read-back of the full joined list. The
//! two statements are not wrapped in a transaction, and a failed
//! read-back reports an error even though the write already happened.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{BookId, BookPayload};
use crate::http::server::AppState;
use crate::models::Book;

/// Body of every successful book response
#[derive(Debug, Serialize)]
pub struct BooksResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub books: Vec<Book>,
}

/// Re-run the shared read after a write.
async fn read_back(
    state: &AppState,
    stage: &'static str,
    message: &'static str,
) -> Result<Json<BooksResponse>, ApiError> {
    let books = state.books.list().await.map_err(ApiError::query(stage))?;
    Ok(Json(BooksResponse {
        message: Some(message),
        books,
    }))
}

/// GET /books - list every book joined with its author
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<BooksResponse>, ApiError> {
    let books = state
        .books
        .list()
        .await
        .map_err(ApiError::query("GET books error"))?;

    Ok(Json(BooksResponse {
        message: None,
        books,
    }))
}

/// POST /books - create a book, then return the full list
async fn create_book(
    State(state): State<Arc<AppState>>,
    BookPayload(input): BookPayload,
) -> Result<Json<BooksResponse>, ApiError> {
    let now = Utc::now();
    let id = state
        .books
        .create(&input, now)
        .await
        .map_err(ApiError::query("CREATE book error"))?;
    tracing::debug!(id, "book created");

    read_back(
        &state,
        "FETCH books after create error",
        "Book created successfully!",
    )
    .await
}

/// PUT|PATCH /books/{id} - overwrite a book, then return the full list
async fn update_book(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
    BookPayload(input): BookPayload,
) -> Result<Json<BooksResponse>, ApiError> {
    let affected = state
        .books
        .update(id, &input)
        .await
        .map_err(ApiError::query("UPDATE book error"))?;
    tracing::debug!(id, affected, "book updated");

    read_back(
        &state,
        "FETCH books after update error",
        "Book updated successfully!",
    )
    .await
}

/// DELETE /books/{id} - delete a book, then return the full list
async fn delete_book(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
) -> Result<Json<BooksResponse>, ApiError> {
    let affected = state
        .books
        .delete(id)
        .await
        .map_err(ApiError::query("DELETE book error"))?;
    tracing::debug!(id, affected, "book deleted");

    read_back(
        &state,
        "FETCH books after delete error",
        "Book deleted successfully!",
    )
    .await
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            put(update_book).patch(update_book).delete(delete_book),
        )
}
