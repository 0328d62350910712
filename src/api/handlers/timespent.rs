//! Handlers for the `/timespent/{id}` endpoints.

use axum::{Json, extract::State};

use crate::api::dto::user::{TimeSpentPayload, UserResponse};
use crate::api::extract::{UserId, ValidatedJson};
use crate::domain::entities::UserUpdate;
use crate::error::AppError;
use crate::state::AppState;

/// Fetches a user's time spent. Same body as `GET /user/{id}`.
///
/// # Endpoint
///
/// `GET /timespent/{id}`
pub async fn get_time_spent_handler(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Overwrites only a user's time spent.
///
/// # Endpoint
///
/// `PUT /timespent/{id}`
///
/// A `name` in the body is echoed back but not stored.
pub async fn update_time_spent_handler(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(payload): ValidatedJson<TimeSpentPayload>,
) -> Result<Json<UserResponse>, AppError> {
    let update = UserUpdate::time_spent_only(payload.time_spent);
    let time_spent = update.time_spent;

    state.user_service.update_user(id, update).await?;

    Ok(Json(UserResponse {
        id,
        name: payload.name,
        time_spent,
    }))
}
