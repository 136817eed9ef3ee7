use sqlx::{PgPool, SqlitePool};

/// Relational store holding the users table.
///
/// Exactly one of the pool accessors returns `Some`; user storage code
/// dispatches on it to pick the SQL dialect.
pub trait DataStore: Send + Sync {
    /// Short backend name for logs and `Debug` output
    fn backend(&self) -> &'static str;

    fn as_sqlite(&self) -> Option<&SqlitePool>;

    fn as_postgres(&self) -> Option<&PgPool>;
}

#[derive(Clone, Debug)]
pub(crate) struct SqliteDataStore {
    pub(super) pool: SqlitePool,
}

#[derive(Clone, Debug)]
pub(crate) struct PostgresDataStore {
    pub(super) pool: PgPool,
}

impl DataStore for SqliteDataStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn as_sqlite(&self) -> Option<&SqlitePool> {
        Some(&self.pool)
    }

    fn as_postgres(&self) -> Option<&PgPool> {
        None
    }
}

impl DataStore for PostgresDataStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    fn as_sqlite(&self) -> Option<&SqlitePool> {
        None
    }

    fn as_postgres(&self) -> Option<&PgPool> {
        Some(&self.pool)
    }
}
