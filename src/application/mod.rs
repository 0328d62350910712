//! Application layer services.
//!
//! - [`services::user_service::UserService`] - User lookups and mutations under a request deadline

pub mod services;
