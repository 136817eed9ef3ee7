//! siteuser - user registration, session login and role-based access for small web sites
//!
//! The crate keeps user records in a SQL data store (SQLite or PostgreSQL)
//! and sessions and CSRF tokens in a cache store (in-memory or Redis). Web
//! frameworks drive it through the `*_core` coordination functions.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let stores = siteuser::Stores::from_env().await?;
//! siteuser::init(&stores).await?;
//! # Ok(())
//! # }
//! ```

mod coordination;
mod password;
mod registration;
mod session;
mod storage;
mod userdb;
mod userdetails;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CoordinationError, issue_csrf_token_core, list_users_core, login_core, logout_core,
    principal_from_headers_core, register_user_core, verify_csrf_token_core,
};

pub use password::PasswordError;

pub use registration::{
    FieldErrors, PASSWORD_MAX_CHARS, PASSWORD_MIN_CHARS, RegistrationForm, USERNAME_MAX_CHARS,
    USERNAME_MIN_CHARS, validate,
};

pub use session::{
    CSRF_COOKIE_MAX_AGE, CSRF_COOKIE_NAME, Principal, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME,
    SessionError,
};

pub use storage::{StorageError, Stores};

pub use userdb::{Authority, User, UserError, UserStore};

pub use userdetails::{UserDetails, UserDetailsError, UserDetailsService};

pub use utils::UtilError;

/// Create the tables this crate needs and validate their schema
pub async fn init(stores: &Stores) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    UserStore::new(stores).init().await?;
    tracing::info!(?stores, "siteuser initialized");
    Ok(())
}
