//! Table and column descriptors for persisted records.

/// One column of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
}

impl ColumnDef {
    const fn new(name: &'static str, sql_type: &'static str) -> Self {
        Self { name, sql_type }
    }
}

/// A table: name, primary key column, and all columns in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    /// Columns other than the primary key, in declaration order.
    pub fn data_columns(&self) -> impl Iterator<Item = &'static ColumnDef> + '_ {
        self.columns.iter().filter(move |c| c.name != self.primary_key)
    }
}

pub const USERS: TableDef = TableDef {
    name: "users",
    primary_key: "id",
    columns: &[
        ColumnDef::new("id", "INTEGER"),
        ColumnDef::new("name", "VARCHAR(32)"),
        ColumnDef::new("second_name", "VARCHAR(32)"),
        ColumnDef::new("birthday", "DATE"),
        ColumnDef::new("email", "VARCHAR(128)"),
        ColumnDef::new("address", "VARCHAR(128)"),
    ],
};

/// Every table created at startup.
pub const TABLES: &[TableDef] = &[USERS];
