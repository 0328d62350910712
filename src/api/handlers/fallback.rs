//! Catch-alls for unmatched routes and methods.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;

/// Answers unknown paths with a JSON 404.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("Not found")
}

/// Answers a known path hit with an unsupported method.
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
