//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_time_spent_handler, get_user_handler,
    health_handler, list_users_handler, update_time_spent_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /user`            - Create a user
/// - `GET    /users`           - List users (`count`, `start`)
/// - `GET    /user/{id}`       - Fetch a user
/// - `PUT    /user/{id}`       - Overwrite name and time spent
/// - `DELETE /user/{id}`       - Delete a user
/// - `GET    /timespent/{id}`  - Fetch a user's time spent
/// - `PUT    /timespent/{id}`  - Overwrite time spent only
/// - `GET    /health`          - Datastore health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user_handler))
        .route("/users", get(list_users_handler))
        .route(
            "/user/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/timespent/{id}",
            get(get_time_spent_handler).put(update_time_spent_handler),
        )
        .route("/health", get(health_handler))
}
