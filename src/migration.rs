//! Create tables from the schema descriptors. Idempotent: every table uses IF NOT EXISTS.

use crate::error::AppError;
use crate::schema::{TableDef, TABLES};
use sqlx::SqlitePool;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// DDL for one table. The primary key is declared `INTEGER PRIMARY KEY` so SQLite assigns it.
pub fn create_table_sql(table: &TableDef) -> String {
    let col_defs: Vec<String> = table
        .columns
        .iter()
        .map(|c| {
            if c.name == table.primary_key {
                format!("{} {} PRIMARY KEY", quote(c.name), c.sql_type)
            } else {
                format!("{} {} NOT NULL", quote(c.name), c.sql_type)
            }
        })
        .collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote(table.name),
        col_defs.join(", ")
    )
}

/// Apply every table in [`TABLES`].
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for table in TABLES {
        let ddl = create_table_sql(table);
        tracing::debug!(sql = %ddl, "migration");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!(tables = TABLES.len(), "migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::USERS;

    #[test]
    fn users_ddl() {
        assert_eq!(
            create_table_sql(&USERS),
            r#"CREATE TABLE IF NOT EXISTS "users" ("id" INTEGER PRIMARY KEY, "name" VARCHAR(32) NOT NULL, "second_name" VARCHAR(32) NOT NULL, "birthday" DATE NOT NULL, "email" VARCHAR(128) NOT NULL, "address" VARCHAR(128) NOT NULL)"#
        );
    }

    #[tokio::test]
    async fn apply_twice_is_harmless() {
        let pool = crate::store::connect_in_memory().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        apply_migrations(&pool).await.unwrap();
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(n, 0);
    }
}
