use axum::{
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use http::{Method, StatusCode, request::Parts};

use siteuser::{Authority, Principal, Stores, principal_from_headers_core};

use super::config::SITE_LOGIN_URL;

/// Rejection for requests without an authenticated principal.
///
/// `GET` requests are redirected to the login page, anything else gets 401.
#[derive(Debug)]
pub struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    pub(crate) fn new(method: Method) -> Self {
        Self { method }
    }

    fn into_response_with_method(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", SITE_LOGIN_URL);
            Redirect::temporary(SITE_LOGIN_URL).into_response()
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.into_response_with_method()
    }
}

/// The authenticated user of a request, available as an Axum extractor
///
/// The principal placed in the request extensions by the access-control
/// middleware is used when present; otherwise the session cookie is resolved.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use siteuser::Stores;
/// use siteuser_axum::AuthUser;
///
/// async fn protected_handler(user: AuthUser) -> String {
///     format!("Hello, {}!", user.username)
/// }
///
/// # fn app(stores: Stores) -> Router {
/// Router::new()
///     .route("/protected", get(protected_handler))
///     .with_state(stores)
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
    pub authorities: Vec<Authority>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.authorities.contains(&Authority::Admin)
    }
}

impl From<Principal> for AuthUser {
    fn from(principal: Principal) -> Self {
        Self {
            username: principal.username,
            authorities: principal.authorities,
        }
    }
}

impl From<&AuthUser> for Principal {
    fn from(auth_user: &AuthUser) -> Self {
        Principal {
            username: auth_user.username.clone(),
            authorities: auth_user.authorities.clone(),
        }
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    Stores: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(principal) = parts.extensions.get::<Principal>() {
            return Ok(AuthUser::from(principal.clone()));
        }

        let stores = Stores::from_ref(state);
        match principal_from_headers_core(&stores, &parts.headers).await {
            Ok(Some(principal)) => Ok(AuthUser::from(principal)),
            Ok(None) => Err(AuthRedirect::new(parts.method.clone())),
            Err(e) => {
                tracing::error!("Failed to resolve session: {}", e);
                Err(AuthRedirect::new(parts.method.clone()))
            }
        }
    }
}

impl<S> OptionalFromRequestParts<S> for AuthUser
where
    Stores: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
