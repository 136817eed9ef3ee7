mod config;
mod postgres;
mod sqlite;
mod store_type;

pub use store_type::UserStore;

use crate::userdb::errors::UserError;

/// Map a failed INSERT, turning a unique-constraint violation into a conflict
fn map_insert_error(err: sqlx::Error, username: &str) -> UserError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            tracing::warn!(username, "Username already exists");
            UserError::Conflict(username.to_string())
        }
        _ => UserError::Storage(err.to_string()),
    }
}
