//! Core domain entities.
//!
//! - [`User`] - A persisted user row
//! - [`NewUser`] - Input for creating a user
//! - [`UserUpdate`] - Input for overwriting a user's mutable fields

pub mod user;

pub use user::{NewUser, User, UserUpdate};
