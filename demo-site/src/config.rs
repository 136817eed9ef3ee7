use std::sync::LazyLock;

pub(crate) static SITE_PORT: LazyLock<u16> = LazyLock::new(|| {
    std::env::var("SITE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000)
});

pub(crate) static SITE_HTTPS_PORT: LazyLock<u16> = LazyLock::new(|| {
    std::env::var("SITE_HTTPS_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3443)
});

/// PEM certificate and key paths; HTTPS is served only when both are set
pub(crate) static SITE_TLS: LazyLock<Option<(String, String)>> = LazyLock::new(|| {
    match (
        std::env::var("SITE_TLS_CERT").ok(),
        std::env::var("SITE_TLS_KEY").ok(),
    ) {
        (Some(cert), Some(key)) if !cert.is_empty() && !key.is_empty() => Some((cert, key)),
        _ => None,
    }
});
