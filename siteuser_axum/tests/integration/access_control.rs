use http::StatusCode;
use siteuser::Authority;

use crate::common::TestApp;

#[tokio::test]
async fn anonymous_get_of_admin_list_redirects_to_login() {
    let mut app = TestApp::new().await;

    let response = app.get("/admin/list").await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location(), Some("/login"));
    assert!(!response.body.contains("ユーザー一覧"));
}

#[tokio::test]
async fn regular_user_is_forbidden_from_admin_list() {
    let mut app = TestApp::new().await;
    app.with_mock_user("Harada", Authority::User).await;

    let response = app.get("/admin/list").await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(response.view_name().is_none());
}

#[tokio::test]
async fn anonymous_get_of_home_redirects_to_login() {
    let mut app = TestApp::new().await;

    let response = app.get("/").await;

    assert!(response.status.is_redirection());
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn forged_session_cookie_is_anonymous() {
    let app = TestApp::new().await;
    let request = http::Request::builder()
        .uri("/")
        .header(
            http::header::COOKIE,
            format!("{}=forged", *siteuser::SESSION_COOKIE_NAME),
        )
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(
        siteuser_axum::site_router_no_trace(app.stores.clone()),
        request,
    )
    .await
    .unwrap();

    assert!(response.status().is_redirection());
}

#[tokio::test]
async fn post_without_csrf_token_is_forbidden() {
    let mut app = TestApp::new().await;
    // Obtain the CSRF cookie but do not submit the token
    let _ = app.csrf_token("/register").await;

    let response = app
        .post_form(
            "/register",
            &[
                ("username", "Harada"),
                ("password", "password"),
                ("email", "harada@example.com"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(
        siteuser::UserStore::new(&app.stores)
            .find_by_username("Harada")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn post_without_csrf_cookie_is_forbidden() {
    let mut app = TestApp::new().await;

    let response = app
        .post_form(
            "/register",
            &[("username", "Harada"), ("_csrf", "made-up-token")],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn post_with_wrong_csrf_token_is_forbidden() {
    let mut app = TestApp::new().await;
    let _ = app.csrf_token("/login").await;

    let response = app
        .post_form(
            "/login",
            &[
                ("username", "Harada"),
                ("password", "password"),
                ("_csrf", "wrong-token"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn csrf_token_is_accepted_from_header() {
    let mut app = TestApp::new().await;
    let token = app.csrf_token("/register").await;

    let response = app
        .post_form_with_headers(
            "/register",
            &[
                ("username", "Harada"),
                ("password", "password"),
                ("email", "harada@example.com"),
            ],
            &[("X-CSRF-Token", &token)],
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/login?register"));
}
