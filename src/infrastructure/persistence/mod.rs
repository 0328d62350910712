//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as` and mapped through
//! `FromRow` structs, so the crate builds without a live database.

pub mod pg_user_repository;

pub use pg_user_repository::PgUserRepository;
