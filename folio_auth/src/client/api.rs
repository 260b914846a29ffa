use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::client::errors::ClientError;
use crate::client::types::AdminProfile;

#[derive(Debug, Deserialize)]
struct AdminLoginPayload {
    admin: AdminProfile,
    token: String,
}

// The backend has shipped both shapes over time, accept either.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AdminLoginResponse {
    Flat(AdminLoginPayload),
    Nested { data: AdminLoginPayload },
}

impl AdminLoginResponse {
    fn into_payload(self) -> AdminLoginPayload {
        match self {
            AdminLoginResponse::Flat(payload) => payload,
            AdminLoginResponse::Nested { data } => data,
        }
    }
}

/// Thin client for the external REST backend's admin endpoints
pub struct BackendClient {
    http: Client,
    base: Url,
}

impl BackendClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| ClientError::Config(format!("Invalid backend base URL: {e}")))?;
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Ok(Self { http, base })
    }

    /// Log in against the backend's admin-login endpoint.
    ///
    /// Returns the admin profile with its bearer token attached.
    pub async fn admin_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminProfile, ClientError> {
        let url = self
            .base
            .join("admin/login")
            .map_err(|e| ClientError::Config(format!("Invalid login URL: {e}")))?;

        let response = self
            .http
            .post(url)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Backend admin login rejected with status {}", status);
            return Err(ClientError::Backend {
                status: status.as_u16(),
            });
        }

        let body: AdminLoginResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Response(format!("Invalid login response: {e}")))?;

        let AdminLoginPayload { mut admin, token } = body.into_payload();
        admin.token = token;
        Ok(admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AdminLoginPayload {
        serde_json::from_str::<AdminLoginResponse>(json)
            .unwrap()
            .into_payload()
    }

    #[test]
    fn test_flat_response_shape() {
        let payload = parse(
            r#"{"admin":{"id":"1","name":"Admin","email":"a@b.c"},"token":"bearer-1"}"#,
        );
        assert_eq!(payload.admin.name, "Admin");
        assert_eq!(payload.token, "bearer-1");
    }

    #[test]
    fn test_nested_response_shape() {
        let payload = parse(
            r#"{"data":{"admin":{"id":"1","name":"Admin","email":"a@b.c"},"token":"bearer-2"}}"#,
        );
        assert_eq!(payload.admin.email, "a@b.c");
        assert_eq!(payload.token, "bearer-2");
    }

    #[test]
    fn test_unknown_response_shape_rejected() {
        assert!(serde_json::from_str::<AdminLoginResponse>(r#"{"ok":true}"#).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let http = Client::new();
        let with = BackendClient::new(http.clone(), "http://localhost:5000/api/").unwrap();
        let without = BackendClient::new(http, "http://localhost:5000/api").unwrap();
        assert_eq!(with.base, without.base);
        assert_eq!(
            with.base.join("admin/login").unwrap().as_str(),
            "http://localhost:5000/api/admin/login"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = BackendClient::new(Client::new(), "not a url");
        assert!(matches!(result, Err(ClientError::Config(_))));
    }
}
