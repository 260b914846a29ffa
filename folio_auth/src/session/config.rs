use std::sync::LazyLock;

/// Name of the session cookie
///
/// Default: "session"
pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "session".to_string())
});

/// Session lifetime in seconds, also used as the cookie Max-Age
///
/// Default: 3600 (one hour)
pub static SESSION_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SESSION_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(3600)
});

/// Whether to emit the Secure attribute on the session cookie
///
/// Default: false, so that plain-http local development works
pub static SESSION_COOKIE_SECURE: LazyLock<bool> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_SECURE")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
});

/// Key material for the session token HMAC
pub(crate) static AUTH_SECRET: LazyLock<Vec<u8>> = LazyLock::new(|| {
    std::env::var("AUTH_SECRET")
        .unwrap_or_else(|_| {
            tracing::warn!("AUTH_SECRET not set, using the development default");
            "dev-secret".to_string()
        })
        .into_bytes()
});

/// Operator login name
pub(crate) static AUTH_USERNAME: LazyLock<String> =
    LazyLock::new(|| std::env::var("AUTH_USERNAME").unwrap_or_else(|_| "admin".to_string()));

/// Operator password
pub(crate) static AUTH_PASSWORD: LazyLock<String> =
    LazyLock::new(|| std::env::var("AUTH_PASSWORD").unwrap_or_else(|_| "admin123".to_string()));
