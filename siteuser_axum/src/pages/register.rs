use askama::Template;
use axum::{extract::State, http::StatusCode, response::Response};
use http::HeaderMap;

use siteuser::{
    CoordinationError, FieldErrors, RegistrationForm, Stores, issue_csrf_token_core,
    register_user_core,
};

use crate::config::login_url_with;
use crate::csrf::CsrfForm;
use crate::error::IntoResponseError;
use crate::view::{found, render_view};

const REGISTER_VIEW: &str = "register";

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate<'a> {
    csrf_token: &'a str,
    username: &'a str,
    email: &'a str,
    gender: i32,
    is_admin: bool,
    errors: &'a FieldErrors,
}

async fn render_register(
    stores: &Stores,
    request_headers: &HeaderMap,
    form: &RegistrationForm,
    errors: FieldErrors,
) -> Result<Response, (StatusCode, String)> {
    let (csrf_token, headers) = issue_csrf_token_core(stores, request_headers)
        .await
        .into_response_error()?;

    let template = RegisterTemplate {
        csrf_token: &csrf_token,
        username: &form.username,
        email: &form.email,
        gender: form.gender,
        is_admin: form.is_admin,
        errors: &errors,
    };
    let mut response = render_view(REGISTER_VIEW, &template, headers)?;
    if errors.has_errors() {
        response.extensions_mut().insert(errors);
    }
    Ok(response)
}

pub(super) async fn register_page(
    State(stores): State<Stores>,
    headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    render_register(
        &stores,
        &headers,
        &RegistrationForm::default(),
        FieldErrors::new(),
    )
    .await
}

pub(super) async fn register(
    State(stores): State<Stores>,
    headers: HeaderMap,
    CsrfForm(form): CsrfForm<RegistrationForm>,
) -> Result<Response, (StatusCode, String)> {
    match register_user_core(&stores, form.clone()).await {
        Ok(user) => {
            tracing::info!(username = %user.username, "Registration complete");
            Ok(found(&login_url_with("register")))
        }
        Err(CoordinationError::Validation(errors)) => {
            render_register(&stores, &headers, &form, errors).await
        }
        Err(e) => Err::<Response, _>(e).into_response_error(),
    }
}
