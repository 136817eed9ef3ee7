use askama::Template;
use axum::{extract::State, http::StatusCode, response::Response};
use http::HeaderMap;

use siteuser::{Principal, Stores, User, issue_csrf_token_core, list_users_core};

use crate::error::IntoResponseError;
use crate::session::AuthUser;
use crate::view::{format_date_jst, render_view};

const LIST_VIEW: &str = "list";

struct TemplateUser {
    username: String,
    email: String,
    gender: &'static str,
    authority: &'static str,
    created_at: String,
}

impl From<User> for TemplateUser {
    fn from(user: User) -> Self {
        Self {
            gender: gender_label(user.gender),
            authority: user.authority.as_str(),
            created_at: format_date_jst(&user.created_at),
            username: user.username,
            email: user.email,
        }
    }
}

fn gender_label(code: i32) -> &'static str {
    match code {
        0 => "男性",
        1 => "女性",
        _ => "その他",
    }
}

#[derive(Template)]
#[template(path = "list.html")]
struct ListTemplate<'a> {
    username: &'a str,
    users: Vec<TemplateUser>,
    csrf_token: &'a str,
}

pub(super) async fn list(
    State(stores): State<Stores>,
    auth_user: AuthUser,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let users = list_users_core(&stores, &Principal::from(&auth_user))
        .await
        .into_response_error()?;
    let (csrf_token, set_cookie) = issue_csrf_token_core(&stores, &headers)
        .await
        .into_response_error()?;

    let template = ListTemplate {
        username: &auth_user.username,
        users: users.into_iter().map(TemplateUser::from).collect(),
        csrf_token: &csrf_token,
    };
    render_view(LIST_VIEW, &template, set_cookie)
}
