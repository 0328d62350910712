//! Request extractors that reject with [`AppError`].
//!
//! Axum's stock `Path` and `Json` rejections answer in plain text; these
//! wrappers keep every failure inside the `{"error": ...}` envelope.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, INVALID_PAYLOAD, INVALID_USER_ID};

/// User id taken from the `{id}` path segment.
///
/// Only ASCII digits fitting in `i64` are accepted. Anything else is rejected
/// before the handler body runs, so the datastore is never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(INVALID_USER_ID))?;

        parse_user_id(&raw).map(UserId)
    }
}

/// Parses a path id made of digits only.
pub fn parse_user_id(raw: &str) -> Result<i64, AppError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::bad_request(INVALID_USER_ID));
    }

    raw.parse()
        .map_err(|_| AppError::bad_request(INVALID_USER_ID))
}

/// JSON body that is decoded and then validated.
///
/// The `Content-Type` header is not consulted: a well-formed JSON body is
/// accepted whatever the client declares. Any decoding failure (syntax, field
/// types, unreadable body) becomes a 400 with a fixed message; validation
/// failures carry the first field message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Unreadable request body");
            AppError::bad_request(INVALID_PAYLOAD)
        })?;

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::bad_request(INVALID_PAYLOAD)
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
