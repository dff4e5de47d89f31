//! API error type with IntoResponse
//!
//! Every failure collapses into the same 500 body. The underlying
//! detail is only written to the server log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// Message returned for every failed request
pub const QUERY_ERROR_MESSAGE: &str = "Error executing query.";

/// API error type
#[derive(Debug)]
pub enum ApiError {
    /// A statement failed; `stage` names where, e.g. "CREATE book error"
    Query { stage: &'static str, source: DbError },

    /// Path or body could not be decoded
    Malformed { reason: String },
}

impl ApiError {
    /// Adapter for `map_err` that tags a database error with its stage.
    pub fn query(stage: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Query { stage, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Query { stage, source } => {
                tracing::error!(error = %source, "{}", stage);
            }
            Self::Malformed { reason } => {
                tracing::error!(reason = %reason, "request could not be decoded");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": QUERY_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
