use thiserror::Error;

use crate::password::PasswordError;
use crate::registration::FieldErrors;
use crate::session::SessionError;
use crate::userdb::UserError;
use crate::userdetails::UserDetailsError;

/// Errors surfaced by the coordination functions
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// The submitted form failed validation; carries the per-field messages
    #[error("Invalid form: {0}")]
    Validation(FieldErrors),

    /// Unknown username or wrong password, deliberately not distinguished
    #[error("Bad credentials")]
    BadCredentials,

    /// Authenticated, but without the required authority
    #[error("Forbidden")]
    Forbidden,

    /// Missing, unknown, mismatched or expired CSRF token
    #[error("CSRF verification failed: {0}")]
    Csrf(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("User error: {0}")]
    UserError(UserError),

    #[error("User details error: {0}")]
    UserDetailsError(UserDetailsError),

    #[error("Password error: {0}")]
    PasswordError(PasswordError),

    #[error("Session error: {0}")]
    SessionError(SessionError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Validation(errors) => tracing::debug!("Invalid form: {}", errors),
            Self::BadCredentials => tracing::info!("Bad credentials"),
            Self::Forbidden => tracing::warn!("Forbidden"),
            Self::Csrf(msg) => tracing::warn!("CSRF verification failed: {}", msg),
            Self::Database(msg) => tracing::error!("Database error: {}", msg),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::UserDetailsError(err) => tracing::error!("User details error: {}", err),
            Self::PasswordError(err) => tracing::error!("Password error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
        }
        self
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        Self::UserError(err).log()
    }
}

impl From<UserDetailsError> for CoordinationError {
    fn from(err: UserDetailsError) -> Self {
        Self::UserDetailsError(err).log()
    }
}

impl From<PasswordError> for CoordinationError {
    fn from(err: PasswordError) -> Self {
        Self::PasswordError(err).log()
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::CsrfToken(msg) => Self::Csrf(msg).log(),
            other => Self::SessionError(other).log(),
        }
    }
}
