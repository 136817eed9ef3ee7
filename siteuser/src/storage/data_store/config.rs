//! Data store construction and table naming

use std::{env, str::FromStr, sync::LazyLock};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::types::{DataStore, PostgresDataStore, SqliteDataStore};
use crate::storage::errors::StorageError;

/// Table prefix from environment variable
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "site_".to_string()));

/// Build a data store from `GENERIC_DATA_STORE_TYPE` and `GENERIC_DATA_STORE_URL`.
pub(crate) fn data_store_from_env() -> Result<Box<dyn DataStore>, StorageError> {
    let store_type = env::var("GENERIC_DATA_STORE_TYPE")
        .map_err(|_| StorageError::Config("GENERIC_DATA_STORE_TYPE must be set".to_string()))?;
    let store_url = env::var("GENERIC_DATA_STORE_URL")
        .map_err(|_| StorageError::Config("GENERIC_DATA_STORE_URL must be set".to_string()))?;

    build_data_store(&store_type, &store_url)
}

pub(crate) fn build_data_store(
    store_type: &str,
    store_url: &str,
) -> Result<Box<dyn DataStore>, StorageError> {
    tracing::info!(store_type, "Initializing data store");

    let store: Box<dyn DataStore> = match store_type {
        "sqlite" => {
            let opts = SqliteConnectOptions::from_str(store_url)
                .map_err(|e| StorageError::Config(format!("Invalid SQLite URL: {e}")))?
                .create_if_missing(true);

            Box::new(SqliteDataStore {
                pool: sqlx::sqlite::SqlitePool::connect_lazy_with(opts),
            })
        }
        "postgres" => Box::new(PostgresDataStore {
            pool: sqlx::PgPool::connect_lazy(store_url)
                .map_err(|e| StorageError::Config(format!("Invalid Postgres URL: {e}")))?,
        }),
        t => {
            return Err(StorageError::Config(format!(
                "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
            )));
        }
    };

    tracing::debug!(backend = store.backend(), "Data store ready");
    Ok(store)
}

/// Ephemeral in-memory SQLite store.
///
/// Every connection to `sqlite::memory:` opens a separate database, so the pool
/// is pinned to a single connection that is never recycled.
pub(crate) fn in_memory_data_store() -> Result<Box<dyn DataStore>, StorageError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| StorageError::Config(e.to_string()))?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_lazy_with(opts);

    Ok(Box::new(SqliteDataStore { pool }))
}
