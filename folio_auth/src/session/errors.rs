use thiserror::Error;

use crate::utils::UtilError;

/// Why a session token failed to decode
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// Token does not have the `payload.signature` shape
    #[error("Malformed token")]
    Malformed,

    /// A segment is not valid base64url
    #[error("Invalid base64 encoding")]
    Base64,

    /// Payload decoded but is not a valid claims object
    #[error("Invalid claims payload")]
    Json,

    /// Signature does not match the payload
    #[error("Signature verification failed")]
    Signature,
}

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Session expired")]
    Expired,

    #[error("Header error: {0}")]
    HeaderError(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    #[error(transparent)]
    Utils(#[from] UtilError),
}
