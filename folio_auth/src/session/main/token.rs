use base64::engine::{Engine, general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::session::config::AUTH_SECRET;
use crate::session::errors::TokenError;
use crate::session::types::SessionClaims;

type HmacSha256 = Hmac<Sha256>;

fn sign(data: &str) -> Vec<u8> {
    let mut mac =
        HmacSha256::new_from_slice(&AUTH_SECRET).expect("HMAC can take key of any size");
    mac.update(data.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Serialize claims into a signed `payload.signature` token.
///
/// Both segments are base64url without padding. The signature covers the
/// encoded payload segment, not the raw JSON.
pub fn encode_token(claims: &SessionClaims) -> Result<String, TokenError> {
    let json = serde_json::to_string(claims).map_err(|_| TokenError::Json)?;
    let payload = URL_SAFE_NO_PAD.encode(json.as_bytes());
    let tag = URL_SAFE_NO_PAD.encode(sign(&payload));
    Ok(format!("{payload}.{tag}"))
}

/// Decode a token, verifying structure and signature.
///
/// Expiry is not checked here. The signature is verified before the
/// payload is parsed, so unauthenticated input never reaches serde.
pub fn decode_token(token: &str) -> Result<SessionClaims, TokenError> {
    let (payload, tag) = token.split_once('.').ok_or(TokenError::Malformed)?;
    if payload.is_empty() || tag.is_empty() || tag.contains('.') {
        return Err(TokenError::Malformed);
    }

    let received = URL_SAFE_NO_PAD.decode(tag).map_err(|_| TokenError::Base64)?;
    let expected = sign(payload);
    if !bool::from(expected.as_slice().ct_eq(&received)) {
        return Err(TokenError::Signature);
    }

    let json = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Base64)?;
    serde_json::from_slice(&json).map_err(|_| TokenError::Json)
}
