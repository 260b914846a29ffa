//! Central configuration for the folio_auth crate

use std::sync::LazyLock;

/// Route prefix under which the auth endpoints are mounted
///
/// Default: "/api/auth"
pub static FOLIO_ROUTE_PREFIX: LazyLock<String> = LazyLock::new(|| {
    std::env::var("FOLIO_ROUTE_PREFIX").unwrap_or_else(|_| "/api/auth".to_string())
});
