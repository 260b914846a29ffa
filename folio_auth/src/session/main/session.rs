use chrono::Utc;
use http::HeaderMap;
use http::header::COOKIE;

use crate::session::config::{SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE, SESSION_MAX_AGE};
use crate::session::errors::SessionError;
use crate::session::main::token::{decode_token, encode_token};
use crate::session::types::SessionClaims;
use crate::utils::header_set_cookie;

/// Issue a signed session token for `username`.
///
/// The token expires `SESSION_MAX_AGE` seconds from now.
pub fn issue_session(username: &str) -> Result<String, SessionError> {
    let claims = SessionClaims {
        username: username.to_string(),
        exp: Utc::now().timestamp() + *SESSION_MAX_AGE as i64,
    };
    Ok(encode_token(&claims)?)
}

/// Issue a session and return the headers that set its cookie.
pub fn issue_session_headers(username: &str) -> Result<HeaderMap, SessionError> {
    let token = issue_session(username)?;
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.to_string(),
        token,
        *SESSION_MAX_AGE as i64,
        *SESSION_COOKIE_SECURE,
    )?;
    tracing::debug!("Issued session for user: {}", username);
    Ok(headers)
}

/// Verify a session token against the current clock.
pub fn verify_session(token: &str) -> Result<SessionClaims, SessionError> {
    verify_session_at(token, Utc::now().timestamp())
}

/// Verify a session token against an explicit clock.
///
/// A token whose expiry equals `now` is already expired.
pub fn verify_session_at(token: &str, now: i64) -> Result<SessionClaims, SessionError> {
    let claims = decode_token(token)?;
    if now >= claims.exp {
        return Err(SessionError::Expired);
    }
    Ok(claims)
}

/// Headers that clear the session cookie on the client.
pub fn prepare_logout_response() -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.to_string(),
        String::new(),
        -86400,
        *SESSION_COOKIE_SECURE,
    )?;
    Ok(headers)
}

/// Extract the raw session token from a request's Cookie header.
///
/// Returns `Ok(None)` when the header or the cookie is absent, or when the
/// cookie value is empty. No verification happens here.
pub fn get_session_token_from_headers(headers: &HeaderMap) -> Result<Option<&str>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        return Ok(None);
    };
    let cookies = cookie_header
        .to_str()
        .map_err(|e| SessionError::HeaderError(format!("Invalid cookie header: {e}")))?;

    let token = cookies.split(';').map(str::trim).find_map(|pair| {
        pair.split_once('=')
            .and_then(|(name, value)| (name == SESSION_COOKIE_NAME.as_str()).then_some(value))
    });
    Ok(token.filter(|t| !t.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::SET_COOKIE;

    fn token_with_exp(username: &str, exp: i64) -> String {
        encode_token(&SessionClaims {
            username: username.to_string(),
            exp,
        })
        .unwrap()
    }

    fn cookie_value(headers: &HeaderMap) -> &str {
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();
        let rest = cookie
            .strip_prefix(&format!("{}=", SESSION_COOKIE_NAME.as_str()))
            .unwrap();
        rest.split_once(';').unwrap().0
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let token = issue_session("admin").unwrap();
        let claims = verify_session(&token).unwrap();
        assert_eq!(claims.username, "admin");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_expiry_boundary() {
        let issued_at = 1_000_000;
        let exp = issued_at + *SESSION_MAX_AGE as i64;
        let token = token_with_exp("admin", exp);

        assert!(verify_session_at(&token, exp - 1).is_ok());
        assert!(matches!(
            verify_session_at(&token, exp),
            Err(SessionError::Expired)
        ));
        assert!(matches!(
            verify_session_at(&token, exp + 1),
            Err(SessionError::Expired)
        ));
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let token = issue_session("admin").unwrap();
        let mut tampered = token.into_bytes();
        let idx = 2;
        tampered[idx] = if tampered[idx] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();
        assert!(matches!(
            verify_session(&tampered),
            Err(SessionError::Token(_))
        ));
    }

    #[test]
    fn test_issue_session_headers_sets_cookie() {
        let headers = issue_session_headers("admin").unwrap();
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();

        assert!(cookie.starts_with(&format!("{}=", SESSION_COOKIE_NAME.as_str())));
        assert!(cookie.contains(&format!("Max-Age={}", *SESSION_MAX_AGE)));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));

        let claims = verify_session(cookie_value(&headers)).unwrap();
        assert_eq!(claims.username, "admin");
    }

    #[test]
    fn test_prepare_logout_response_expires_cookie() {
        let headers = prepare_logout_response().unwrap();
        let cookie = headers.get(SET_COOKIE).unwrap().to_str().unwrap();

        assert!(cookie.starts_with(&format!("{}=;", SESSION_COOKIE_NAME.as_str())));
        assert!(cookie.contains("Max-Age=-86400"));
    }

    #[test]
    fn test_get_session_token_absent_header() {
        let headers = HeaderMap::new();
        assert_eq!(get_session_token_from_headers(&headers).unwrap(), None);
    }

    #[test]
    fn test_get_session_token_other_cookies_only() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; lang=en"));
        assert_eq!(get_session_token_from_headers(&headers).unwrap(), None);
    }

    #[test]
    fn test_get_session_token_among_others() {
        let mut headers = HeaderMap::new();
        let value = format!("theme=dark; {}=tok.sig; lang=en", SESSION_COOKIE_NAME.as_str());
        headers.insert(COOKIE, HeaderValue::from_str(&value).unwrap());
        assert_eq!(
            get_session_token_from_headers(&headers).unwrap(),
            Some("tok.sig")
        );
    }

    #[test]
    fn test_get_session_token_empty_value_is_none() {
        let mut headers = HeaderMap::new();
        let value = format!("{}=", SESSION_COOKIE_NAME.as_str());
        headers.insert(COOKIE, HeaderValue::from_str(&value).unwrap());
        assert_eq!(get_session_token_from_headers(&headers).unwrap(), None);
    }

    #[test]
    fn test_get_session_token_invalid_header_value() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_bytes(&[0xFF]).unwrap());
        assert!(matches!(
            get_session_token_from_headers(&headers),
            Err(SessionError::HeaderError(_))
        ));
    }
}
