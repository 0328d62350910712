//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - PostgreSQL repository implementation

pub mod persistence;
