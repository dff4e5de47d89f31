//! Custom Axum extractors
//!
//! Rejections are routed through [`ApiError`] so a bad id or body gets
//! the same response as a failed query.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::BookInput;

/// Book id from the `{id}` path segment
pub struct BookId(pub i64);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Malformed {
                reason: rejection.body_text(),
            })?;

        Ok(Self(id))
    }
}

/// JSON body for create and update
pub struct BookPayload(pub BookInput);

impl<S> FromRequest<S> for BookPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(input) = Json::<BookInput>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Malformed {
                reason: rejection.body_text(),
            })?;

        Ok(Self(input))
    }
}
