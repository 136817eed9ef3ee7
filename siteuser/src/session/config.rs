use std::str::FromStr;
use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> =
    LazyLock::new(|| env_or("SESSION_COOKIE_NAME", "__Host-SessionId".to_string()));

/// Session lifetime in seconds
pub static SESSION_COOKIE_MAX_AGE: LazyLock<u64> =
    LazyLock::new(|| env_or("SESSION_COOKIE_MAX_AGE", 1800));

pub static CSRF_COOKIE_NAME: LazyLock<String> =
    LazyLock::new(|| env_or("CSRF_COOKIE_NAME", "__Host-CsrfId".to_string()));

/// CSRF token lifetime in seconds
pub static CSRF_COOKIE_MAX_AGE: LazyLock<u64> =
    LazyLock::new(|| env_or("CSRF_COOKIE_MAX_AGE", 3600));

/// Read and parse an environment variable, falling back when unset or unparsable
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn with_env_var<F, R>(key: &str, value: Option<&str>, test: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::var(key).ok();

        match value {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        let result = test();

        match original {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        result
    }

    #[test]
    #[serial]
    fn test_env_or_default_when_unset() {
        with_env_var("SITEUSER_TEST_MAX_AGE", None, || {
            assert_eq!(env_or("SITEUSER_TEST_MAX_AGE", 1800u64), 1800);
        });
    }

    #[test]
    #[serial]
    fn test_env_or_custom_value() {
        with_env_var("SITEUSER_TEST_MAX_AGE", Some("60"), || {
            assert_eq!(env_or("SITEUSER_TEST_MAX_AGE", 1800u64), 60);
        });
        with_env_var("SITEUSER_TEST_COOKIE", Some("sid"), || {
            assert_eq!(
                env_or("SITEUSER_TEST_COOKIE", "__Host-SessionId".to_string()),
                "sid"
            );
        });
    }

    #[test]
    #[serial]
    fn test_env_or_invalid_value_falls_back() {
        with_env_var("SITEUSER_TEST_MAX_AGE", Some("invalid"), || {
            assert_eq!(env_or("SITEUSER_TEST_MAX_AGE", 3600u64), 3600);
        });
    }
}
