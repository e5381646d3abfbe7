//! Values that can be bound to a SQLite statement, whatever the column type.

use chrono::NaiveDate;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

#[derive(Clone, Debug, PartialEq)]
pub enum SqliteBindValue {
    I64(i64),
    Text(String),
    Date(NaiveDate),
}

impl From<i64> for SqliteBindValue {
    fn from(n: i64) -> Self {
        SqliteBindValue::I64(n)
    }
}

impl From<&str> for SqliteBindValue {
    fn from(s: &str) -> Self {
        SqliteBindValue::Text(s.to_string())
    }
}

impl From<NaiveDate> for SqliteBindValue {
    fn from(d: NaiveDate) -> Self {
        SqliteBindValue::Date(d)
    }
}

impl<'q> Encode<'q, Sqlite> for SqliteBindValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            SqliteBindValue::I64(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf),
            SqliteBindValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf),
            SqliteBindValue::Date(d) => <NaiveDate as Encode<Sqlite>>::encode_by_ref(d, buf),
        }
    }
}

impl sqlx::Type<Sqlite> for SqliteBindValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }
}
