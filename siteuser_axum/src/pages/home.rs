use askama::Template;
use axum::{extract::State, http::StatusCode, response::Response};
use http::HeaderMap;

use siteuser::{Stores, issue_csrf_token_core};

use crate::error::IntoResponseError;
use crate::session::AuthUser;
use crate::view::render_view;

const INDEX_VIEW: &str = "index";

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    username: &'a str,
    is_admin: bool,
    csrf_token: &'a str,
}

pub(super) async fn index(
    State(stores): State<Stores>,
    user: AuthUser,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let (csrf_token, set_cookie) = issue_csrf_token_core(&stores, &headers)
        .await
        .into_response_error()?;

    let template = IndexTemplate {
        username: &user.username,
        is_admin: user.is_admin(),
        csrf_token: &csrf_token,
    };
    render_view(INDEX_VIEW, &template, set_cookie)
}
