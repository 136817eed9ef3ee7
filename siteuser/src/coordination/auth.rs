use http::HeaderMap;

use crate::password::verify_password;
use crate::session::{
    Principal, create_session, get_principal_from_headers, issue_csrf_token,
    prepare_logout_response, verify_csrf_token,
};
use crate::storage::Stores;
use crate::userdetails::{UserDetailsError, UserDetailsService};

use super::errors::CoordinationError;

/// Authenticate a username/password pair and open a session.
///
/// Returns the principal and the headers that set its session cookie. An
/// unknown username and a wrong password both yield
/// [`CoordinationError::BadCredentials`].
#[tracing::instrument(skip(stores, password))]
pub async fn login_core(
    stores: &Stores,
    username: &str,
    password: &str,
) -> Result<(Principal, HeaderMap), CoordinationError> {
    let details = match UserDetailsService::new(stores)
        .load_user_by_username(username)
        .await
    {
        Ok(details) => details,
        Err(UserDetailsError::UsernameNotFound(_)) => {
            return Err(CoordinationError::BadCredentials.log());
        }
        Err(e) => return Err(e.into()),
    };

    match verify_password(password, &details.password_hash).await {
        Ok(true) => {}
        Ok(false) => return Err(CoordinationError::BadCredentials.log()),
        Err(e) => {
            tracing::error!(error = %e, "Stored password hash is unusable");
            return Err(CoordinationError::BadCredentials.log());
        }
    }

    let principal = Principal::from(details);
    let headers = create_session(stores, &principal).await?;
    tracing::info!("User logged in");
    Ok((principal, headers))
}

/// End the request's session, returning headers that expire the session cookie
pub async fn logout_core(
    stores: &Stores,
    request_headers: &HeaderMap,
) -> Result<HeaderMap, CoordinationError> {
    Ok(prepare_logout_response(stores, request_headers).await?)
}

/// The principal of the request's session, if it has a live one
pub async fn principal_from_headers_core(
    stores: &Stores,
    request_headers: &HeaderMap,
) -> Result<Option<Principal>, CoordinationError> {
    Ok(get_principal_from_headers(stores, request_headers).await?)
}

/// A CSRF token to embed in a form, plus any `Set-Cookie` headers binding it
pub async fn issue_csrf_token_core(
    stores: &Stores,
    request_headers: &HeaderMap,
) -> Result<(String, HeaderMap), CoordinationError> {
    Ok(issue_csrf_token(stores, request_headers).await?)
}

/// Fails with [`CoordinationError::Csrf`] unless `submitted` matches the token bound to the request
pub async fn verify_csrf_token_core(
    stores: &Stores,
    request_headers: &HeaderMap,
    submitted: Option<&str>,
) -> Result<(), CoordinationError> {
    Ok(verify_csrf_token(stores, request_headers, submitted).await?)
}
