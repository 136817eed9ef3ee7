mod csrf;
mod session;

pub(crate) use csrf::{issue_csrf_token, verify_csrf_token};
pub(crate) use session::{create_session, get_principal_from_headers, prepare_logout_response};
