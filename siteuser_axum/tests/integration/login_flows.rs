use http::StatusCode;
use siteuser::{Authority, SESSION_COOKIE_NAME};

use crate::common::TestApp;

#[tokio::test]
async fn login_with_correct_password_opens_a_session() {
    let mut app = TestApp::new().await;
    app.create_user("Harada", "password", Authority::User).await;

    let response = app.login("Harada", "password").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/"));
    assert!(app.has_cookie(&SESSION_COOKIE_NAME));

    let home = app.get("/").await;
    assert_eq!(home.status, StatusCode::OK);
    assert_eq!(home.view_name(), Some("index"));
    assert!(home.body.contains("Harada"));
    assert!(!home.body.contains(r#"href="/admin/list""#));
}

#[tokio::test]
async fn admin_home_links_to_user_list() {
    let mut app = TestApp::new().await;
    app.with_mock_user("admin", Authority::Admin).await;

    let home = app.get("/").await;

    assert!(home.body.contains(r#"href="/admin/list""#));
}

#[tokio::test]
async fn wrong_password_redirects_to_login_error() {
    let mut app = TestApp::new().await;
    app.create_user("Harada", "password", Authority::User).await;

    let response = app.login("Harada", "wrong-password").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/login?error"));
    assert!(!app.has_cookie(&SESSION_COOKIE_NAME));
}

#[tokio::test]
async fn unknown_user_redirects_to_login_error() {
    let mut app = TestApp::new().await;

    let response = app.login("Takeda", "password").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/login?error"));
}

#[tokio::test]
async fn logout_ends_the_session() {
    let mut app = TestApp::new().await;
    app.with_mock_user("Harada", Authority::User).await;
    let token = app.csrf_token("/").await;

    let response = app.post_form("/logout", &[("_csrf", &token)]).await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/login?logout"));
    assert!(!app.has_cookie(&SESSION_COOKIE_NAME));

    let home = app.get("/").await;
    assert_eq!(home.location(), Some("/login"));
}

#[tokio::test]
async fn logout_requires_csrf_token() {
    let mut app = TestApp::new().await;
    app.with_mock_user("Harada", Authority::User).await;

    let response = app.post_form("/logout", &[]).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.get("/").await.status, StatusCode::OK);
}

#[tokio::test]
async fn login_page_shows_flag_messages() {
    let mut app = TestApp::new().await;

    let page = app.get("/login").await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.view_name(), Some("login"));
    assert!(!page.body.contains(r#"class="info""#));

    let page = app.get("/login?register").await;
    assert!(page.body.contains("登録が完了しました"));

    let page = app.get("/login?logout").await;
    assert!(page.body.contains("ログアウトしました"));

    let page = app.get("/login?error").await;
    assert!(page.body.contains(r#"class="error""#));
}

#[tokio::test]
async fn login_page_redirects_authenticated_users() {
    let mut app = TestApp::new().await;
    app.with_mock_user("Harada", Authority::User).await;

    let response = app.get("/login").await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/"));
}

#[tokio::test]
async fn registered_user_can_log_in() {
    let mut app = TestApp::new().await;
    let token = app.csrf_token("/register").await;
    let registered = app
        .post_form(
            "/register",
            &[
                ("username", "Sato"),
                ("password", "secret"),
                ("email", "sato@example.com"),
                ("gender", "1"),
                ("_csrf", &token),
            ],
        )
        .await;
    assert_eq!(registered.location(), Some("/login?register"));

    let response = app.login("Sato", "secret").await;

    assert_eq!(response.location(), Some("/"));
    assert_eq!(app.get("/").await.status, StatusCode::OK);
}
