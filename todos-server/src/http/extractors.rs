//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use crate::models::{TodoId, TodoPayload, ValidationError};
use super::error::ApiError;

/// Extract and validate a todo id from path
pub struct ValidTodoId(pub TodoId);

impl<S> FromRequestParts<S> for ValidTodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ValidationError::InvalidId { value: e.body_text() })?;

        Ok(Self(id.parse()?))
    }
}

/// Todo request body, decoded regardless of `Content-Type`.
///
/// Every decode failure is a 400, unlike `Json`, which answers 415/422 for
/// some of them.
pub struct TodoBody(pub TodoPayload);

impl<S> FromRequest<S> for TodoBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ValidationError::InvalidBody { reason: e.body_text() })?;

        Ok(Self(TodoPayload::from_json(&bytes)?))
    }
}
