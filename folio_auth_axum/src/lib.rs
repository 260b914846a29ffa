mod auth;
mod config;
mod error;
mod middleware;
mod router;
mod session;

pub use config::{FOLIO_LOGIN_URL, FOLIO_PROTECTED_PREFIX};
pub use middleware::redirect_unauthenticated;
pub use router::auth_router;
pub use session::{AuthRedirect, AuthUser};

// Re-export the route prefix from the folio_auth crate
pub use folio_auth::FOLIO_ROUTE_PREFIX;
