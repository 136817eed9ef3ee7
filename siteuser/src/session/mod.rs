mod config;
mod errors;
mod main;
mod types;

pub use config::{CSRF_COOKIE_MAX_AGE, CSRF_COOKIE_NAME, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME};
pub use errors::SessionError;
pub use types::Principal;

pub(crate) use main::{
    create_session, get_principal_from_headers, issue_csrf_token, prepare_logout_response,
    verify_csrf_token,
};
