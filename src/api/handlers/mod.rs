//! HTTP request handlers for API endpoints.
//!
//! Each handler parses its input, makes one service call and maps the outcome
//! to a status code and JSON body.

pub mod fallback;
pub mod health;
pub mod timespent;
pub mod users;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use timespent::{get_time_spent_handler, update_time_spent_handler};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
