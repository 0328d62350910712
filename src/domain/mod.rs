//! Domain layer containing the user entity and the data access contract.
//!
//! # Architecture
//!
//! - [`entities`] - Plain data structures for users and their inputs
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or SQL. Handlers talk to it
//! through [`crate::application::services::UserService`].

pub mod entities;
pub mod repositories;
