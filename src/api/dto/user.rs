//! DTOs for the user and time-spent endpoints.
//!
//! On the wire the time value is a JSON number under the key `timespent`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewUser, User, UserUpdate, user::round_time_spent};

/// Request body for `POST /user` and `PUT /user/{id}`.
///
/// `timespent` defaults to zero when absent or `null`.
#[derive(Debug, Deserialize, Validate)]
pub struct UserPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[serde(default, rename = "timespent", deserialize_with = "time_spent_or_zero")]
    #[validate(custom(function = "validate_time_spent"))]
    pub time_spent: Decimal,
}

impl UserPayload {
    pub fn into_new_user(self) -> NewUser {
        NewUser::new(self.name, self.time_spent)
    }

    pub fn into_update(self) -> UserUpdate {
        UserUpdate::full(self.name, self.time_spent)
    }
}

/// Request body for `PUT /timespent/{id}`.
///
/// `name` is accepted and echoed back but never persisted on this route.
#[derive(Debug, Deserialize, Validate)]
pub struct TimeSpentPayload {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "timespent", deserialize_with = "time_spent_or_zero")]
    #[validate(custom(function = "validate_time_spent"))]
    pub time_spent: Decimal,
}

/// Reads a JSON number as a decimal, with `null` meaning zero.
fn time_spent_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = rust_decimal::serde::float_option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

fn validate_time_spent(value: &Decimal) -> Result<(), ValidationError> {
    if round_time_spent(*value) < Decimal::ZERO {
        return Err(ValidationError::new("range").with_message("Time spent must not be negative".into()));
    }
    Ok(())
}

/// JSON representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "timespent", with = "rust_decimal::serde::float")]
    pub time_spent: Decimal,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            time_spent: user.time_spent,
        }
    }
}

/// Body returned by `DELETE /user/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub result: &'static str,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}
