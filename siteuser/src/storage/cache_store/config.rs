use std::env;

use super::types::{CacheStore, InMemoryCacheStore, RedisCacheStore};
use crate::storage::errors::StorageError;

/// Build a cache store from `GENERIC_CACHE_STORE_TYPE` and `GENERIC_CACHE_STORE_URL`.
pub(crate) async fn cache_store_from_env() -> Result<Box<dyn CacheStore>, StorageError> {
    let store_type = env::var("GENERIC_CACHE_STORE_TYPE")
        .map_err(|_| StorageError::Config("GENERIC_CACHE_STORE_TYPE must be set".to_string()))?;
    let store_url = env::var("GENERIC_CACHE_STORE_URL").unwrap_or_default();

    build_cache_store(&store_type, &store_url).await
}

pub(crate) async fn build_cache_store(
    store_type: &str,
    store_url: &str,
) -> Result<Box<dyn CacheStore>, StorageError> {
    tracing::info!(store_type, "Initializing cache store");

    let store: Box<dyn CacheStore> = match store_type {
        "memory" => Box::new(InMemoryCacheStore::new()),
        "redis" => {
            let client = redis::Client::open(store_url).map_err(|e| {
                tracing::error!("Failed to create Redis client: {}", e);
                StorageError::from(e)
            })?;
            Box::new(RedisCacheStore { client })
        }
        t => {
            return Err(StorageError::Config(format!(
                "Unsupported cache store type: {t}. Supported types are 'memory' and 'redis'"
            )));
        }
    };

    // Verify the backend is reachable before handing it out
    store.init().await?;

    tracing::info!(store_type, "Connected to cache store");
    Ok(store)
}
