use axum::{
    Router,
    routing::{get, post},
};

use super::auth;

/// Router exposing the session endpoints.
///
/// Nest it under [`FOLIO_ROUTE_PREFIX`](folio_auth::FOLIO_ROUTE_PREFIX):
///
/// ```no_run
/// use axum::Router;
/// use folio_auth_axum::{FOLIO_ROUTE_PREFIX, auth_router};
///
/// let app: Router = Router::new().nest(FOLIO_ROUTE_PREFIX.as_str(), auth_router());
/// ```
pub fn auth_router() -> Router {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}
