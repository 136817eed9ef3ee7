mod config;
mod types;

pub(crate) use config::{DB_TABLE_PREFIX, data_store_from_env, in_memory_data_store};
pub use types::DataStore;
