//! Central configuration for the folio_auth_axum crate

use std::sync::LazyLock;

/// URL of the login page unauthenticated traffic is redirected to
///
/// Default: "/login"
pub static FOLIO_LOGIN_URL: LazyLock<String> =
    LazyLock::new(|| std::env::var("FOLIO_LOGIN_URL").unwrap_or_else(|_| "/login".to_string()));

/// Path prefix the route guard protects
///
/// Default: "/dashboard"
pub static FOLIO_PROTECTED_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("FOLIO_PROTECTED_PREFIX").unwrap_or_else(|_| "/dashboard".to_string())
});

#[cfg(test)]
mod tests {

    // Helper functions that replicate the logic of the LazyLock initializers
    // so we can test them without modifying environment variables

    fn get_login_url(env_value: Option<&str>) -> String {
        env_value
            .map(|s| s.to_string())
            .unwrap_or_else(|| "/login".to_string())
    }

    fn get_protected_prefix(env_value: Option<&str>) -> String {
        env_value
            .map(|s| s.to_string())
            .unwrap_or_else(|| "/dashboard".to_string())
    }

    #[test]
    fn test_login_url_default() {
        assert_eq!(get_login_url(None), "/login");
    }

    #[test]
    fn test_login_url_custom() {
        assert_eq!(get_login_url(Some("/signin")), "/signin");
    }

    #[test]
    fn test_protected_prefix_default() {
        assert_eq!(get_protected_prefix(None), "/dashboard");
    }

    #[test]
    fn test_protected_prefix_custom() {
        assert_eq!(get_protected_prefix(Some("/admin")), "/admin");
    }
}
