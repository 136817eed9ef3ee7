use http::StatusCode;
use siteuser::{Authority, UserDetailsService};

use crate::common::TestApp;

/// An empty registration form re-renders the register view with errors
#[tokio::test]
async fn when_there_is_registration_error_expect_to_see_errors() {
    let mut app = TestApp::new().await;
    let token = app.csrf_token("/register").await;

    let response = app.post_form("/register", &[("_csrf", &token)]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.has_errors());
    assert_eq!(response.view_name(), Some("register"));
    assert!(response.location().is_none());
}

/// Registering an admin user redirects to the login page
#[tokio::test]
async fn when_registering_as_admin_user_expect_to_succeed() {
    let mut app = TestApp::new().await;
    let token = app.csrf_token("/register").await;

    let response = app
        .post_form(
            "/register",
            &[
                ("username", "管理者ユーザ"),
                ("password", "password"),
                ("email", "admin@example.com"),
                ("gender", "0"),
                ("admin", "true"),
                ("authority", "ADMIN"),
                ("_csrf", &token),
            ],
        )
        .await;

    assert!(!response.has_errors());
    assert_eq!(response.location(), Some("/login?register"));
    assert_eq!(response.status, StatusCode::FOUND);

    let details = UserDetailsService::new(&app.stores)
        .load_user_by_username("管理者ユーザ")
        .await
        .unwrap();
    assert_eq!(details.authorities, vec![Authority::Admin]);
}

/// An ADMIN sees the user list
#[tokio::test]
async fn when_logged_in_as_admin_user_expect_to_see_list_of_users() {
    let mut app = TestApp::new().await;
    app.with_mock_user("admin", Authority::Admin).await;

    let response = app.get("/admin/list").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("ユーザー一覧"));
    assert_eq!(response.view_name(), Some("list"));
}

#[tokio::test]
async fn user_list_shows_registered_users() {
    let mut app = TestApp::new().await;
    app.create_user("Harada", "password", Authority::User).await;
    app.with_mock_user("admin", Authority::Admin).await;

    let response = app.get("/admin/list").await;

    assert!(response.body.contains("Harada"));
    assert!(response.body.contains("<td>USER</td>"));
    assert!(response.body.contains("<td>ADMIN</td>"));
}

#[tokio::test]
async fn registration_errors_keep_entered_values() {
    let mut app = TestApp::new().await;
    let token = app.csrf_token("/register").await;

    let response = app
        .post_form(
            "/register",
            &[
                ("username", "Harada"),
                ("password", "abc"),
                ("email", "harada@example.com"),
                ("_csrf", &token),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let errors = response.errors.as_ref().unwrap();
    assert!(errors.has_field_error("password"));
    assert!(!errors.has_field_error("username"));
    assert!(response.body.contains(r#"value="Harada""#));
    assert!(response.body.contains("size must be between 4 and 255"));
}

#[tokio::test]
async fn registering_a_taken_username_is_a_field_error() {
    let mut app = TestApp::new().await;
    app.create_user("Harada", "password", Authority::User).await;
    let token = app.csrf_token("/register").await;

    let response = app
        .post_form(
            "/register",
            &[
                ("username", "Harada"),
                ("password", "other-password"),
                ("email", "someone@example.com"),
                ("_csrf", &token),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.view_name(), Some("register"));
    assert_eq!(
        response.errors.unwrap().get("username"),
        ["is already taken"]
    );
}

#[tokio::test]
async fn register_page_renders_form() {
    let mut app = TestApp::new().await;

    let response = app.get("/register").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.view_name(), Some("register"));
    assert!(response.errors.is_none());
    assert!(response.body.contains(r#"name="_csrf""#));
}

#[tokio::test]
async fn non_numeric_gender_is_a_field_error() {
    let mut app = TestApp::new().await;
    let token = app.csrf_token("/register").await;

    let response = app
        .post_form(
            "/register",
            &[
                ("username", "Harada"),
                ("password", "password"),
                ("email", "harada@example.com"),
                ("gender", "abc"),
                ("_csrf", &token),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.view_name(), Some("register"));
    let errors = response.errors.as_ref().unwrap();
    assert_eq!(errors.get("gender"), ["must be a number"]);
    assert_eq!(errors.len(), 1);
    assert!(response.body.contains("must be a number"));
}

#[tokio::test]
async fn unparseable_admin_and_authority_are_field_errors() {
    let mut app = TestApp::new().await;
    let token = app.csrf_token("/register").await;

    let response = app
        .post_form(
            "/register",
            &[
                ("username", "Harada"),
                ("password", "password"),
                ("email", "harada@example.com"),
                ("gender", ""),
                ("admin", "maybe"),
                ("authority", "ROOT"),
                ("_csrf", &token),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.view_name(), Some("register"));
    let errors = response.errors.unwrap();
    assert!(errors.has_field_error("gender"));
    assert!(errors.has_field_error("admin"));
    assert!(errors.has_field_error("authority"));
}

#[tokio::test]
async fn checkbox_on_and_lowercase_authority_register_an_admin() {
    let mut app = TestApp::new().await;
    let token = app.csrf_token("/register").await;

    let response = app
        .post_form(
            "/register",
            &[
                ("username", "Takeda"),
                ("password", "password"),
                ("email", "takeda@example.com"),
                ("gender", "1"),
                ("admin", "on"),
                ("authority", "admin"),
                ("_csrf", &token),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(response.location(), Some("/login?register"));

    let details = UserDetailsService::new(&app.stores)
        .load_user_by_username("Takeda")
        .await
        .unwrap();
    assert!(details.is_admin());
}
