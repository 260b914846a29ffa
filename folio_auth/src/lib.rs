//! Signed-cookie session authentication for the folio admin dashboard.
//!
//! The crate has two halves:
//!
//! - Session logic: a stateless HMAC-signed session
//!   token, credential validation, issue/verify helpers and the cookie
//!   headers that carry the token. This is what a server embeds.
//! - A [`SessionStore`] client: the state machine a frontend shell drives
//!   to log in against the backend, mirror the session cookie and keep the
//!   admin profile in client-side storage.
//!
//! All knobs are environment variables with development defaults, see the
//! `config` modules.

mod client;
mod config;
mod session;
mod utils;

pub use config::FOLIO_ROUTE_PREFIX;

pub use session::{
    SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE, SESSION_MAX_AGE, SessionClaims, SessionError,
    TokenError, decode_token, encode_token, get_session_token_from_headers, issue_session,
    issue_session_headers, prepare_logout_response, validate_credentials, verify_session,
    verify_session_at,
};

pub use client::{
    AdminProfile, AuthState, BackendClient, ClientConfig, ClientError, CookieJar, MemoryCookieJar,
    MemoryStateStore, Navigation, SessionStore, StateStore,
};
