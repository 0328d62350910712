//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can produce ends up here and is rendered as
//! `{"error": "<message>"}` with the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Message returned for any `id` path segment that is not a plain integer.
pub const INVALID_USER_ID: &str = "Invalid user ID";

/// Message returned when the request body cannot be decoded.
pub const INVALID_PAYLOAD: &str = "Invalid request payload";

/// Message returned when a read matches no row.
pub const USER_NOT_FOUND: &str = "User not found";

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed path parameter or request body. Never reaches the datastore.
    #[error("{0}")]
    Validation(String),

    /// A read matched zero rows.
    #[error("{0}")]
    NotFound(String),

    /// Any other datastore failure. The raw driver text is sent to the client.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The datastore did not answer within the per-request deadline.
    #[error("Request timed out")]
    Timeout,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| INVALID_PAYLOAD.to_string());

        AppError::Validation(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Database(e) => tracing::error!(error = %e, "Datastore error"),
            AppError::Timeout => tracing::warn!("Datastore call exceeded request deadline"),
            _ => {}
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
