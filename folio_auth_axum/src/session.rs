use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::{TypedHeader, headers};
use http::{Method, StatusCode, request::Parts};

use folio_auth::{SESSION_COOKIE_NAME, SessionClaims, verify_session};

use super::config::FOLIO_LOGIN_URL;

/// Rejection for the [`AuthUser`] extractor.
///
/// Browsers navigating with GET are sent to the login page; anything else
/// gets a plain 401.
pub struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    fn new(method: Method) -> Self {
        Self { method }
    }

    fn into_response_with_method(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", FOLIO_LOGIN_URL.as_str());
            Redirect::temporary(FOLIO_LOGIN_URL.as_str()).into_response()
        } else {
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.into_response_with_method()
    }
}

/// Authenticated principal, available as an Axum extractor
///
/// When used as an extractor it reads the session cookie and verifies the
/// token's signature and expiry. Handlers taking `AuthUser` therefore only
/// run for requests carrying a valid session.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use folio_auth_axum::AuthUser;
///
/// async fn protected_handler(user: AuthUser) -> String {
///     format!("Hello, {}!", user.username)
/// }
///
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler));
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// Login name the session was issued for
    pub username: String,
    /// Session expiry as a unix timestamp in seconds
    pub expires_at: i64,
}

impl From<SessionClaims> for AuthUser {
    fn from(claims: SessionClaims) -> Self {
        AuthUser {
            username: claims.username,
            expires_at: claims.exp,
        }
    }
}

impl<B> FromRequestParts<B> for AuthUser
where
    B: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let method = parts.method.clone();
        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("Failed to extract cookies");
            AuthRedirect::new(method.clone())
        })?;

        let session_cookie = cookies.get(SESSION_COOKIE_NAME.as_str()).ok_or_else(|| {
            tracing::debug!("No session cookie present");
            AuthRedirect::new(method.clone())
        })?;

        let claims = verify_session(session_cookie).map_err(|e| {
            tracing::debug!("Session verification failed: {}", e);
            AuthRedirect::new(method.clone())
        })?;

        Ok(AuthUser::from(claims))
    }
}

impl<B> OptionalFromRequestParts<B> for AuthUser
where
    B: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &B,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthUser as FromRequestParts<B>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
