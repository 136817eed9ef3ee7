use axum::{
    Form,
    extract::{FromRef, FromRequest, Request, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use siteuser::{CoordinationError, RegistrationForm, Stores, verify_csrf_token_core};

/// Header carrying the CSRF token for non-form clients
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// A form that carries its own CSRF token field
pub trait CsrfProtected {
    fn csrf_token(&self) -> Option<&str>;
}

impl CsrfProtected for RegistrationForm {
    fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }
}

/// A url-encoded form whose CSRF token has been verified.
///
/// The token is taken from the `X-CSRF-Token` header when present,
/// otherwise from the form's `_csrf` field, and checked against the token
/// bound to the request's CSRF cookie.
#[derive(Debug, Clone)]
pub struct CsrfForm<T>(pub T);

#[derive(Debug)]
pub enum CsrfFormRejection {
    Form(FormRejection),
    Csrf(String),
    Internal(String),
}

impl IntoResponse for CsrfFormRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Form(rejection) => rejection.into_response(),
            Self::Csrf(msg) => (StatusCode::FORBIDDEN, msg).into_response(),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl<S, T> FromRequest<S> for CsrfForm<T>
where
    T: DeserializeOwned + CsrfProtected + Send,
    Stores: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = CsrfFormRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let Form(form) = Form::<T>::from_request(req, state)
            .await
            .map_err(CsrfFormRejection::Form)?;

        let submitted = headers
            .get(CSRF_HEADER)
            .and_then(|h| h.to_str().ok())
            .or_else(|| form.csrf_token())
            .map(str::to_string);

        let stores = Stores::from_ref(state);
        match verify_csrf_token_core(&stores, &headers, submitted.as_deref()).await {
            Ok(()) => Ok(CsrfForm(form)),
            Err(CoordinationError::Csrf(msg)) => Err(CsrfFormRejection::Csrf(msg)),
            Err(e) => Err(CsrfFormRejection::Internal(e.to_string())),
        }
    }
}
