//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;

/// Process-wide state, cloned cheaply per request.
///
/// Holds the only shared resource, the datastore pool, behind the user
/// service. Handlers never reach the pool directly.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }
}
