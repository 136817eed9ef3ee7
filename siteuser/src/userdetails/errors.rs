use thiserror::Error;

use crate::userdb::UserError;

#[derive(Debug, Error, Clone)]
pub enum UserDetailsError {
    /// No user with exactly this username exists
    #[error("Username not found: {0}")]
    UsernameNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<UserError> for UserDetailsError {
    fn from(err: UserError) -> Self {
        UserDetailsError::Storage(err.to_string())
    }
}
