//! Handlers for the `/user` and `/users` endpoints.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use crate::api::dto::pagination::ListParams;
use crate::api::dto::user::{DeleteResponse, UserPayload, UserResponse};
use crate::api::extract::{UserId, ValidatedJson};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /user`
///
/// # Request Body
///
/// ```json
/// { "name": "test user", "timespent": 11.22 }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed, the name is empty or the time is negative.
/// Returns 500 on datastore errors.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .user_service
        .create_user(payload.into_new_user())
        .await?;

    tracing::info!(id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists users in id order.
///
/// # Endpoint
///
/// `GET /users?count=10&start=0`
///
/// `count` outside `1..=10` becomes 10 and a negative `start` becomes 0.
/// Unparsable values are treated as `0` before clamping and a repeated key
/// keeps its first value. The response is always a JSON array, `[]` when
/// nothing matches.
pub async fn list_users_handler(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let (start, count) = ListParams::from_pairs(pairs).window();

    let users = state.user_service.list_users(start, count).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetches a single user.
///
/// # Endpoint
///
/// `GET /user/{id}`
///
/// # Errors
///
/// Returns 400 for a non-numeric id, 404 if no user matches, 500 on datastore errors.
pub async fn get_user_handler(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Overwrites a user's name and time spent.
///
/// # Endpoint
///
/// `PUT /user/{id}`
///
/// The response echoes the requested id with the submitted fields. A missing
/// id is not reported: the update simply touches no row.
pub async fn update_user_handler(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<Json<UserResponse>, AppError> {
    let update = payload.into_update();
    let name = update.name.clone().unwrap_or_default();
    let time_spent = update.time_spent;

    state.user_service.update_user(id, update).await?;

    Ok(Json(UserResponse {
        id,
        name,
        time_spent,
    }))
}

/// Permanently deletes a user.
///
/// # Endpoint
///
/// `DELETE /user/{id}`
///
/// Deleting an id that does not exist still answers `{"result": "success"}`.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<DeleteResponse>, AppError> {
    state.user_service.delete_user(id).await?;

    tracing::info!(id, "User deleted");

    Ok(Json(DeleteResponse::success()))
}
