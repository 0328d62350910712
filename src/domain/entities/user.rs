//! Domain entity representing a user and the time they have spent.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits stored for `time_spent`.
pub const TIME_SPENT_SCALE: u32 = 2;

/// A user row as persisted in the datastore.
///
/// `id` is assigned by the datastore on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub time_spent: Decimal,
}

impl User {
    pub fn new(id: i64, name: String, time_spent: Decimal) -> Self {
        Self {
            id,
            name,
            time_spent,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub time_spent: Decimal,
}

impl NewUser {
    pub fn new(name: String, time_spent: Decimal) -> Self {
        Self {
            name,
            time_spent: round_time_spent(time_spent),
        }
    }
}

/// Input data for overwriting an existing user.
///
/// `name: None` leaves the stored name untouched; `time_spent` is always written.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub time_spent: Decimal,
}

impl UserUpdate {
    /// Update that writes both the name and the time spent.
    pub fn full(name: String, time_spent: Decimal) -> Self {
        Self {
            name: Some(name),
            time_spent: round_time_spent(time_spent),
        }
    }

    /// Update that writes only the time spent.
    pub fn time_spent_only(time_spent: Decimal) -> Self {
        Self {
            name: None,
            time_spent: round_time_spent(time_spent),
        }
    }
}

/// Rounds a time value to the stored precision, half away from zero like
/// PostgreSQL `NUMERIC`.
pub fn round_time_spent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(TIME_SPENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_time_spent() {
        assert_eq!(round_time_spent(dec("11.222")), dec("11.22"));
        assert_eq!(round_time_spent(dec("11.225")), dec("11.23"));
        assert_eq!(round_time_spent(dec("7")), dec("7"));
    }

    #[test]
    fn test_new_user_rounds() {
        let new_user = NewUser::new("test user".to_string(), dec("11.228"));
        assert_eq!(new_user.name, "test user");
        assert_eq!(new_user.time_spent, dec("11.23"));
    }

    #[test]
    fn test_full_update_carries_name() {
        let update = UserUpdate::full("renamed".to_string(), dec("1.5"));
        assert_eq!(update.name.as_deref(), Some("renamed"));
        assert_eq!(update.time_spent, dec("1.5"));
    }

    #[test]
    fn test_time_spent_only_update_has_no_name() {
        let update = UserUpdate::time_spent_only(dec("3.333"));
        assert!(update.name.is_none());
        assert_eq!(update.time_spent, dec("3.33"));
    }
}
