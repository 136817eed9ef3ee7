//! High-level operations that tie the stores, sessions and user records together.
//!
//! - `user`: registration
//! - `auth`: login, logout, session and CSRF checks
//! - `admin`: admin-only listing

mod admin;
mod auth;
mod errors;
mod user;

pub use admin::list_users_core;
pub use auth::{
    issue_csrf_token_core, login_core, logout_core, principal_from_headers_core,
    verify_csrf_token_core,
};
pub use errors::CoordinationError;
pub use user::register_user_core;
