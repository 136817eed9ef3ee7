use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("CSRF token error: {0}")]
    CsrfToken(String),

    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}
