//! Deterministic synthetic users for the bulk-seed route.

use crate::error::AppError;
use crate::models::UserIn;
use chrono::NaiveDate;

/// The `i`-th fake user (1-based): `user{i}`, `Suserov{i}`, born on
/// `(1950 + i)-(i % 12 + 1)-(i % 30 + 1)`, `user{i}@mail.ru`, `road{i} house{2i}`.
pub fn fake_user(i: u32) -> Result<UserIn, AppError> {
    let year = i32::try_from(i)
        .ok()
        .and_then(|n| n.checked_add(1950))
        .ok_or_else(|| AppError::BadRequest(format!("seed index {} out of range", i)))?;
    let birthday = NaiveDate::from_ymd_opt(year, i % 12 + 1, i % 30 + 1)
        .ok_or_else(|| AppError::BadRequest(format!("no calendar date for seed index {}", i)))?;
    Ok(UserIn {
        name: format!("user{}", i),
        second_name: format!("Suserov{}", i),
        birthday,
        email: format!("user{}@mail.ru", i),
        address: format!("road{} house{}", i, u64::from(i) * 2),
    })
}

/// Fake users `1..=count`.
pub fn fake_users(count: u32) -> Result<Vec<UserIn>, AppError> {
    (1..=count).map(fake_user).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Validate;

    #[test]
    fn first_user() {
        let user = fake_user(1).unwrap();
        assert_eq!(user.name, "user1");
        assert_eq!(user.second_name, "Suserov1");
        assert_eq!(user.birthday, NaiveDate::from_ymd_opt(1951, 2, 2).unwrap());
        assert_eq!(user.email, "user1@mail.ru");
        assert_eq!(user.address, "road1 house2");
    }

    #[test]
    fn month_and_day_wrap() {
        let user = fake_user(12).unwrap();
        assert_eq!(user.birthday, NaiveDate::from_ymd_opt(1962, 1, 13).unwrap());
        let user = fake_user(30).unwrap();
        assert_eq!(user.birthday, NaiveDate::from_ymd_opt(1980, 7, 1).unwrap());
    }

    #[test]
    fn generated_users_pass_validation() {
        for user in fake_users(1000).unwrap() {
            assert!(user.validate().is_ok(), "{} invalid", user.name);
        }
    }
}
