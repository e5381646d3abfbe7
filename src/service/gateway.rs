//! User persistence: one SQL statement per operation against an explicitly passed pool.

use crate::error::AppError;
use crate::models::{User, UserIn};
use crate::schema::USERS;
use crate::sql::{self, QueryBuf};
use sqlx::query::Query;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqlitePool;

/// Rows per multi-row INSERT. Five columns each keeps a statement well below SQLite's bound-parameter limit.
pub const SEED_CHUNK_ROWS: usize = 100;

pub struct UserGateway;

impl UserGateway {
    /// Insert one row and return the identifier SQLite assigned.
    pub async fn insert(pool: &SqlitePool, user: &UserIn) -> Result<i64, AppError> {
        let q = sql::insert(&USERS, user.row_values());
        let result = bind(&q).execute(pool).await?;
        Ok(result.last_insert_rowid())
    }

    /// Every row, ordered by id.
    pub async fn select_all(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        let q = sql::select_all(&USERS);
        let rows = bind(&q).fetch_all(pool).await?;
        let users = rows.iter().map(User::from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    /// The row with `id`, or `None`.
    pub async fn select_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let q = sql::select_by_id(&USERS, id);
        let row = bind(&q).fetch_optional(pool).await?;
        Ok(row.as_ref().map(User::from_row).transpose()?)
    }

    /// Overwrite every non-id column. Returns rows affected; 0 when `id` does not exist.
    pub async fn update_by_id(pool: &SqlitePool, id: i64, user: &UserIn) -> Result<u64, AppError> {
        let q = sql::update(&USERS, id, user.row_values());
        let result = bind(&q).execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Delete the row with `id`. Returns rows affected; 0 when already absent.
    pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let q = sql::delete(&USERS, id);
        let result = bind(&q).execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Insert all `users` in one transaction using multi-row statements of at most [`SEED_CHUNK_ROWS`].
    /// Nothing is kept if any chunk fails.
    pub async fn insert_many(pool: &SqlitePool, users: &[UserIn]) -> Result<u64, AppError> {
        if users.is_empty() {
            return Ok(0);
        }
        let mut inserted = 0;
        let mut tx = pool.begin().await?;
        for chunk in users.chunks(SEED_CHUNK_ROWS) {
            let rows = chunk.iter().map(UserIn::row_values).collect();
            let q = sql::insert_many(&USERS, rows);
            inserted += bind(&q).execute(&mut *tx).await?.rows_affected();
        }
        tx.commit().await?;
        Ok(inserted)
    }
}

fn bind(q: &QueryBuf) -> Query<'_, Sqlite, SqliteArguments<'_>> {
    tracing::debug!(sql = %q.sql, params = q.params.len(), "query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;
    use crate::service::seed::fake_user;
    use crate::store::connect_in_memory;
    use chrono::NaiveDate;

    async fn pool() -> SqlitePool {
        let pool = connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        pool
    }

    fn user(name: &str) -> UserIn {
        UserIn {
            name: name.into(),
            second_name: "Petrova".into(),
            birthday: NaiveDate::from_ymd_opt(1985, 12, 31).unwrap(),
            email: "anna@example.com".into(),
            address: "Main street 1".into(),
        }
    }

    #[tokio::test]
    async fn insert_then_select_returns_input_with_id() {
        let pool = pool().await;
        let input = user("Anna");
        let id = UserGateway::insert(&pool, &input).await.unwrap();
        let stored = UserGateway::select_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(stored, User::from_input(id, input));
    }

    #[tokio::test]
    async fn ids_are_assigned_in_sequence() {
        let pool = pool().await;
        let first = UserGateway::insert(&pool, &user("Anna")).await.unwrap();
        let second = UserGateway::insert(&pool, &user("Boris")).await.unwrap();
        assert!(second > first);
        let all = UserGateway::select_all(&pool).await.unwrap();
        assert_eq!(all.iter().map(|u| u.id).collect::<Vec<_>>(), vec![first, second]);
    }

    #[tokio::test]
    async fn missing_id_is_absent_not_an_error() {
        let pool = pool().await;
        assert!(UserGateway::select_by_id(&pool, 42).await.unwrap().is_none());
        assert_eq!(UserGateway::update_by_id(&pool, 42, &user("Anna")).await.unwrap(), 0);
        assert_eq!(UserGateway::delete_by_id(&pool, 42).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let pool = pool().await;
        let id = UserGateway::insert(&pool, &user("Anna")).await.unwrap();
        let replacement = user("Vera");
        assert_eq!(UserGateway::update_by_id(&pool, id, &replacement).await.unwrap(), 1);
        let once = UserGateway::select_by_id(&pool, id).await.unwrap();
        UserGateway::update_by_id(&pool, id, &replacement).await.unwrap();
        let twice = UserGateway::select_by_id(&pool, id).await.unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice, Some(User::from_input(id, replacement)));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let pool = pool().await;
        let id = UserGateway::insert(&pool, &user("Anna")).await.unwrap();
        assert_eq!(UserGateway::delete_by_id(&pool, id).await.unwrap(), 1);
        assert_eq!(UserGateway::delete_by_id(&pool, id).await.unwrap(), 0);
        assert!(UserGateway::select_by_id(&pool, id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_many_spans_chunks() {
        let pool = pool().await;
        let count = SEED_CHUNK_ROWS as u32 * 2 + 5;
        let users = (1..=count).map(|i| fake_user(i).unwrap()).collect::<Vec<_>>();
        let inserted = UserGateway::insert_many(&pool, &users).await.unwrap();
        assert_eq!(inserted, u64::from(count));
        let all = UserGateway::select_all(&pool).await.unwrap();
        assert_eq!(all.len(), count as usize);
        assert_eq!(all.last().unwrap().name, format!("user{}", count));
    }

    #[tokio::test]
    async fn failed_chunk_rolls_back_whole_batch() {
        let pool = pool().await;
        sqlx::query(
            "CREATE TRIGGER reject_user150 BEFORE INSERT ON users \
             WHEN NEW.name = 'user150' BEGIN SELECT RAISE(ABORT, 'rejected'); END",
        )
        .execute(&pool)
        .await
        .unwrap();
        let users = (1..=SEED_CHUNK_ROWS as u32 * 2)
            .map(|i| fake_user(i).unwrap())
            .collect::<Vec<_>>();

        let result = UserGateway::insert_many(&pool, &users).await;
        assert!(matches!(result, Err(AppError::Db(_))));
        assert!(UserGateway::select_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_many_of_nothing() {
        let pool = pool().await;
        assert_eq!(UserGateway::insert_many(&pool, &[]).await.unwrap(), 0);
    }
}
