//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/user`, `/users`, `/user/{id}`, `/timespent/{id}` - User CRUD
//! - `/health`                                          - Datastore health check
//! - anything else                                      - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{method_not_allowed_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::api_routes()
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Wraps [`app_router`] so `/users/` and `/users` reach the same handler.
///
/// Normalization has to run before routing, so it wraps the router instead
/// of being added as one of its layers.
pub fn app_service(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_router(state))
}
