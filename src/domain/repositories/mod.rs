//! Repository trait definitions for the domain layer.
//!
//! The PostgreSQL implementation lives in `crate::infrastructure::persistence`.
//! A `mockall` mock is generated for unit tests.

pub mod user_repository;

pub use user_repository::UserRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
