//! User record shapes: `UserIn` without the identifier, `User` with it.

use crate::schema::USERS;
use crate::service::{Validate, ValidationErrors, ValidationRule};
use crate::sql::SqliteBindValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use utoipa::ToSchema;

const NAME: ValidationRule = ValidationRule::length(2, 32);
const SECOND_NAME: ValidationRule = ValidationRule::length(2, 32);
const EMAIL: ValidationRule = ValidationRule::email(128);
const ADDRESS: ValidationRule = ValidationRule::length(5, 128);

/// Create and update body. Unknown keys, including `id`, are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserIn {
    #[schema(min_length = 2, max_length = 32)]
    pub name: String,
    #[schema(min_length = 2, max_length = 32)]
    pub second_name: String,
    pub birthday: NaiveDate,
    #[schema(max_length = 128)]
    pub email: String,
    #[schema(min_length = 5, max_length = 128)]
    pub address: String,
}

impl Validate for UserIn {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_str("name", &self.name, &NAME);
        errors.check_str("second_name", &self.second_name, &SECOND_NAME);
        errors.check_str("email", &self.email, &EMAIL);
        errors.check_str("address", &self.address, &ADDRESS);
        errors.into_result()
    }
}

impl UserIn {
    /// Value for a data column of [`USERS`]; `None` for any other name.
    fn column_value(&self, column: &str) -> Option<SqliteBindValue> {
        let value = match column {
            "name" => self.name.as_str().into(),
            "second_name" => self.second_name.as_str().into(),
            "birthday" => self.birthday.into(),
            "email" => self.email.as_str().into(),
            "address" => self.address.as_str().into(),
            _ => return None,
        };
        Some(value)
    }

    /// Values in `USERS.data_columns()` order, ready for the SQL builder.
    pub fn row_values(&self) -> Vec<SqliteBindValue> {
        USERS
            .data_columns()
            .filter_map(|c| self.column_value(c.name))
            .collect()
    }
}

/// Stored user as returned by every read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub second_name: String,
    pub birthday: NaiveDate,
    pub email: String,
    pub address: String,
}

impl User {
    pub fn from_input(id: i64, input: UserIn) -> Self {
        Self {
            id,
            name: input.name,
            second_name: input.second_name,
            birthday: input.birthday,
            email: input.email,
            address: input.address,
        }
    }

    pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            second_name: row.try_get("second_name")?,
            birthday: row.try_get("birthday")?,
            email: row.try_get("email")?,
            address: row.try_get("address")?,
        })
    }
}
