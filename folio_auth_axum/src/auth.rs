use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use folio_auth::{
    get_session_token_from_headers, issue_session_headers, prepare_logout_response,
    validate_credentials, verify_session,
};

use super::error::IntoResponseError;

#[derive(Debug, Deserialize)]
pub(super) struct LoginForm {
    username: String,
    password: String,
}

/// POST login handler.
///
/// A body that is not valid JSON of the expected shape is a 400, wrong
/// credentials are a 401 with a deliberately generic message. Success sets
/// the session cookie and returns `{"ok": true}`.
pub(super) async fn login(
    payload: Result<Json<LoginForm>, JsonRejection>,
) -> Result<Response, (StatusCode, String)> {
    let Ok(Json(form)) = payload else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Bad request"})),
        )
            .into_response());
    };

    if !validate_credentials(&form.username, &form.password) {
        tracing::debug!("Rejected login attempt for user: {}", form.username);
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid credentials"})),
        )
            .into_response());
    }

    let headers = issue_session_headers(&form.username).into_response_error()?;
    Ok((headers, Json(json!({"ok": true}))).into_response())
}

/// GET who-am-I handler.
///
/// Fails closed: any missing, malformed, forged or expired token is the
/// same anonymous 401.
pub(super) async fn me(headers: HeaderMap) -> Response {
    let claims = get_session_token_from_headers(&headers)
        .ok()
        .flatten()
        .and_then(|token| verify_session(token).ok());

    match claims {
        Some(claims) => Json(json!({
            "authenticated": true,
            "username": claims.username,
        }))
        .into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"authenticated": false})),
        )
            .into_response(),
    }
}

/// POST logout handler. Expires the session cookie unconditionally.
pub(super) async fn logout() -> Result<Response, (StatusCode, String)> {
    let headers = prepare_logout_response().into_response_error()?;
    Ok((headers, Json(json!({"ok": true}))).into_response())
}
