//! # Timespent API
//!
//! A small JSON CRUD service over a single `users` table, built with Axum and
//! PostgreSQL. Each user has a name and an accumulated "time spent" value.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `User` entity and repository trait
//! - **Application Layer** ([`application`]) - `UserService`, request deadlines
//! - **Infrastructure Layer** ([`infrastructure`]) - PostgreSQL repository
//! - **API Layer** ([`api`]) - Handlers, DTOs, extractors and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export APP_DB_USERNAME=postgres APP_DB_PASSWORD=secret APP_DB_NAME=timespent
//! cargo run
//! ```
//!
//! Migrations in `./migrations` are applied at startup. See [`config`] for
//! the remaining options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{NewUser, User, UserUpdate};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
