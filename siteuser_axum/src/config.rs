//! Page locations used by the site's redirects

use std::sync::LazyLock;

/// The login page. Anonymous visitors of protected pages are sent here, and
/// registration and logout redirect to it with a query flag.
pub const SITE_LOGIN_URL: &str = "/login";

/// Where a successful login lands
/// Default: "/"
pub static SITE_REDIRECT_USER: LazyLock<String> =
    LazyLock::new(|| env_or_default(std::env::var("SITE_REDIRECT_USER").ok(), "/"));

fn env_or_default(env_value: Option<String>, default: &str) -> String {
    env_value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// `{login}?{flag}`, e.g. `/login?register`
pub(crate) fn login_url_with(flag: &str) -> String {
    format!("{SITE_LOGIN_URL}?{flag}")
}
