use http::{Result as HttpResult, StatusCode};

use folio_auth::SessionError;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                SessionError::Token(_) => StatusCode::UNAUTHORIZED,
                SessionError::Expired => StatusCode::UNAUTHORIZED,
                SessionError::HeaderError(_) => StatusCode::BAD_REQUEST,
                SessionError::Cookie(_) => StatusCode::BAD_REQUEST,
                SessionError::Utils(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}

/// Implementation for http::Error (used by Response::builder())
impl<T> IntoResponseError<T> for HttpResult<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }
}
