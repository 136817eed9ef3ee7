mod config;
mod memory;
mod redis;
mod types;

pub(crate) use config::cache_store_from_env;
pub use types::CacheStore;
pub(crate) use types::InMemoryCacheStore;
