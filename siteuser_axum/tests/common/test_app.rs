use std::collections::HashMap;

use axum::{
    Router,
    body::{Body, to_bytes},
};
use http::{
    HeaderMap, Method, Request, StatusCode,
    header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
};
use siteuser::{Authority, RegistrationForm, Stores, register_user_core};
use siteuser_axum::{FieldErrors, ViewName, site_router_no_trace};
use tower::ServiceExt;

/// Mock browser for the site router
///
/// Keeps a cookie jar across requests and never follows redirects.
pub struct TestApp {
    router: Router,
    pub stores: Stores,
    cookies: HashMap<String, String>,
}

/// What a test needs to inspect from a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub view: Option<ViewName>,
    pub errors: Option<FieldErrors>,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    pub fn view_name(&self) -> Option<&'static str> {
        self.view.map(|v| v.as_str())
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(FieldErrors::has_errors)
    }
}

impl TestApp {
    /// Fresh stores with the users table created, and an empty cookie jar
    pub async fn new() -> Self {
        let stores = Stores::in_memory().expect("in-memory stores");
        siteuser::init(&stores).await.expect("init stores");
        Self {
            router: site_router_no_trace(stores.clone()),
            stores,
            cookies: HashMap::new(),
        }
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_form(&mut self, path: &str, form: &[(&str, &str)]) -> TestResponse {
        self.post_form_with_headers(path, form, &[]).await
    }

    pub async fn post_form_with_headers(
        &mut self,
        path: &str,
        form: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::from(encode_form(form))).unwrap();
        self.send(request).await
    }

    async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if !self.cookies.is_empty() {
            let cookie_header = self
                .cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            request
                .headers_mut()
                .insert(COOKIE, cookie_header.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();
        let (parts, body) = response.into_parts();
        self.store_cookies(&parts.headers);

        let body = to_bytes(body, usize::MAX).await.unwrap();
        TestResponse {
            status: parts.status,
            view: parts.extensions.get::<ViewName>().copied(),
            errors: parts.extensions.get::<FieldErrors>().cloned(),
            headers: parts.headers,
            body: String::from_utf8(body.to_vec()).unwrap(),
        }
    }

    fn store_cookies(&mut self, headers: &HeaderMap) {
        for set_cookie in headers.get_all(SET_COOKIE) {
            let set_cookie = set_cookie.to_str().unwrap();
            let mut attributes = set_cookie.split(';').map(str::trim);
            let Some((name, value)) = attributes.next().and_then(|pair| pair.split_once('='))
            else {
                continue;
            };
            let expired = attributes
                .filter_map(|attr| attr.strip_prefix("Max-Age="))
                .any(|age| age.parse::<i64>().map(|age| age <= 0).unwrap_or(false));
            if expired {
                self.cookies.remove(name);
            } else {
                self.cookies.insert(name.to_string(), value.to_string());
            }
        }
    }

    pub fn has_cookie(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    /// Load a form page and return the CSRF token embedded in it
    pub async fn csrf_token(&mut self, path: &str) -> String {
        let page = self.get(path).await;
        extract_csrf_token(&page.body).expect("page embeds a CSRF token")
    }

    /// Register a user directly in the store
    pub async fn create_user(&self, username: &str, password: &str, authority: Authority) {
        let form = RegistrationForm {
            username: username.to_string(),
            password: password.to_string(),
            email: "user@example.com".to_string(),
            gender: 0,
            is_admin: authority == Authority::Admin,
            authority: Some(authority),
            csrf_token: None,
            ..Default::default()
        };
        register_user_core(&self.stores, form).await.unwrap();
    }

    /// Log in through the login form
    pub async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        let token = self.csrf_token("/login").await;
        self.post_form(
            "/login",
            &[
                ("username", username),
                ("password", password),
                ("_csrf", &token),
            ],
        )
        .await
    }

    /// Create a user with the given authority and log in as that user
    pub async fn with_mock_user(&mut self, username: &str, authority: Authority) {
        self.create_user(username, "password", authority).await;
        let response = self.login(username, "password").await;
        assert_eq!(response.status, StatusCode::FOUND);
        assert_eq!(response.location(), Some("/"));
    }
}

fn extract_csrf_token(body: &str) -> Option<String> {
    let marker = r#"name="_csrf" value=""#;
    let start = body.find(marker)? + marker.len();
    let end = body[start..].find('"')?;
    Some(body[start..start + end].to_string())
}

fn encode_form(form: &[(&str, &str)]) -> String {
    form.iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
