use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use http::HeaderMap;
use serde::Deserialize;

use siteuser::{CoordinationError, Stores, issue_csrf_token_core, login_core};

use crate::config::{SITE_REDIRECT_USER, login_url_with};
use crate::csrf::{CsrfForm, CsrfProtected};
use crate::error::IntoResponseError;
use crate::session::AuthUser;
use crate::view::{found, render_view};

const LOGIN_VIEW: &str = "login";

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate<'a> {
    csrf_token: &'a str,
    info: Option<&'a str>,
    error: Option<&'a str>,
}

/// `?register`, `?error` and `?logout` flags set by the redirects into the login page
#[derive(Debug, Default, Deserialize)]
pub(super) struct LoginQuery {
    register: Option<String>,
    error: Option<String>,
    logout: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoginForm {
    username: String,
    password: String,
    #[serde(rename = "_csrf")]
    csrf_token: Option<String>,
}

impl CsrfProtected for LoginForm {
    fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }
}

pub(super) async fn login_page(
    State(stores): State<Stores>,
    user: Option<AuthUser>,
    Query(query): Query<LoginQuery>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    if user.is_some() {
        return Ok(found(SITE_REDIRECT_USER.as_str()));
    }

    let (csrf_token, set_cookie) = issue_csrf_token_core(&stores, &headers)
        .await
        .into_response_error()?;

    let info = if query.register.is_some() {
        Some("登録が完了しました。ログインしてください。")
    } else if query.logout.is_some() {
        Some("ログアウトしました。")
    } else {
        None
    };
    let error = query
        .error
        .is_some()
        .then_some("ユーザー名またはパスワードが正しくありません。");

    let template = LoginTemplate {
        csrf_token: &csrf_token,
        info,
        error,
    };
    render_view(LOGIN_VIEW, &template, set_cookie)
}

pub(super) async fn login(
    State(stores): State<Stores>,
    CsrfForm(form): CsrfForm<LoginForm>,
) -> Result<Response, (StatusCode, String)> {
    match login_core(&stores, &form.username, &form.password).await {
        Ok((_, headers)) => Ok((headers, found(SITE_REDIRECT_USER.as_str())).into_response()),
        Err(CoordinationError::BadCredentials) => Ok(found(&login_url_with("error"))),
        Err(e) => Err::<Response, _>(e).into_response_error(),
    }
}
