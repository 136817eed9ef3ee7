mod cache_store;
mod data_store;
mod errors;
mod schema_validation;
mod types;

use std::sync::Arc;
use tokio::sync::Mutex;

pub use cache_store::CacheStore;
pub use data_store::DataStore;
pub use errors::StorageError;
pub use types::CacheData;

pub(crate) use data_store::DB_TABLE_PREFIX;
pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};

/// Handles to the persistent data store and the session/CSRF cache store.
///
/// Cloning is cheap; clones share the same underlying pools.
#[derive(Clone)]
pub struct Stores {
    pub(crate) data: Arc<dyn DataStore>,
    pub(crate) cache: Arc<Mutex<Box<dyn CacheStore>>>,
}

impl Stores {
    /// Build both stores from the `GENERIC_*_STORE_*` environment variables.
    pub async fn from_env() -> Result<Self, StorageError> {
        let data = data_store::data_store_from_env()?;
        let cache = cache_store::cache_store_from_env().await?;
        Ok(Self::new(data, cache))
    }

    /// Ephemeral stores: a private in-memory SQLite database and an in-memory cache.
    ///
    /// Each call yields an isolated instance, nothing is shared between them.
    pub fn in_memory() -> Result<Self, StorageError> {
        let data = data_store::in_memory_data_store()?;
        let cache: Box<dyn CacheStore> = Box::new(cache_store::InMemoryCacheStore::new());
        Ok(Self::new(data, cache))
    }

    fn new(data: Box<dyn DataStore>, cache: Box<dyn CacheStore>) -> Self {
        Self {
            data: Arc::from(data),
            cache: Arc::new(Mutex::new(cache)),
        }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("data", &self.data.backend())
            .finish_non_exhaustive()
    }
}
