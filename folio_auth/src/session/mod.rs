mod config;
mod errors;
mod main;
mod types;

pub use config::{SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE, SESSION_MAX_AGE};
pub use errors::{SessionError, TokenError};
pub use main::{
    decode_token, encode_token, get_session_token_from_headers, issue_session,
    issue_session_headers, prepare_logout_response, validate_credentials, verify_session,
    verify_session_at,
};
pub use types::SessionClaims;
