//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from table descriptors.

use crate::schema::TableDef;
use crate::sql::SqliteBindValue;

/// Quote identifier for SQLite (safe: only from descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqliteBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqliteBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn select_column_list(table: &TableDef) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn data_column_list(table: &TableDef) -> String {
    table
        .data_columns()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by primary key.
pub fn select_all(table: &TableDef) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.primary_key)
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ?{}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.primary_key),
        n
    );
    q
}

/// INSERT one row. `values` follow `table.data_columns()` order; the primary key is left to the engine.
pub fn insert(table: &TableDef, values: Vec<SqliteBindValue>) -> QueryBuf {
    insert_many(table, vec![values])
}

/// Multi-row INSERT: one `VALUES` tuple per row.
pub fn insert_many(table: &TableDef, rows: Vec<Vec<SqliteBindValue>>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut tuples = Vec::with_capacity(rows.len());
    for row in rows {
        let placeholders: Vec<String> = row
            .into_iter()
            .map(|v| format!("?{}", q.push_param(v)))
            .collect();
        tuples.push(format!("({})", placeholders.join(", ")));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES {}",
        quoted(table.name),
        data_column_list(table),
        tuples.join(", ")
    );
    q
}

/// UPDATE every data column of the row with primary key `id`.
pub fn update(table: &TableDef, id: i64, values: Vec<SqliteBindValue>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (c, v) in table.data_columns().zip(values) {
        let n = q.push_param(v);
        sets.push(format!("{} = ?{}", quoted(c.name), n));
    }
    let id_param = q.push_param(id.into());
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ?{}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.primary_key),
        id_param
    );
    q
}

/// DELETE by primary key.
pub fn delete(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ?{}",
        quoted(table.name),
        quoted(table.primary_key),
        n
    );
    q
}
