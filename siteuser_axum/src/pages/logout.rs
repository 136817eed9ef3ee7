use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http::HeaderMap;
use serde::Deserialize;

use siteuser::{Stores, logout_core};

use crate::config::login_url_with;
use crate::csrf::{CsrfForm, CsrfProtected};
use crate::error::IntoResponseError;
use crate::view::found;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogoutForm {
    #[serde(rename = "_csrf")]
    csrf_token: Option<String>,
}

impl CsrfProtected for LogoutForm {
    fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }
}

/// Ends the session and sends the browser back to the login page
pub(super) async fn logout(
    State(stores): State<Stores>,
    headers: HeaderMap,
    CsrfForm(_): CsrfForm<LogoutForm>,
) -> Result<Response, (StatusCode, String)> {
    let cookie_headers = logout_core(&stores, &headers)
        .await
        .into_response_error()?;
    tracing::debug!("Logged out");
    Ok((cookie_headers, found(&login_url_with("logout"))).into_response())
}
