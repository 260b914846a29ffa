use reqwest::Client;
use serde_json::json;
use url::Url;

use crate::client::api::BackendClient;
use crate::client::errors::ClientError;
use crate::client::storage::{CORRUPT_SENTINEL, CookieJar, KEY_PROFILE, KEY_TOKEN, StateStore};
use crate::client::types::{AdminProfile, AuthState, Navigation};
use crate::config::FOLIO_ROUTE_PREFIX;
use crate::session::{SESSION_COOKIE_NAME, SESSION_MAX_AGE};

/// Endpoints the session store talks to
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the external REST backend, e.g. `http://localhost:5000/api`
    pub backend_base_url: String,
    /// Origin serving the session endpoints, e.g. `http://localhost:3000`
    pub site_base_url: String,
}

/// Client-side mirror of the authentication state.
///
/// Owns the persisted profile/token pair, the session cookie mirror and the
/// login/logout orchestration. Construct once at application start, then
/// call [`init`](Self::init) to pick up a persisted session.
pub struct SessionStore {
    site: Url,
    backend: BackendClient,
    http: Client,
    storage: Box<dyn StateStore>,
    cookies: Box<dyn CookieJar>,
    state: AuthState,
}

impl SessionStore {
    pub fn new(
        config: ClientConfig,
        storage: Box<dyn StateStore>,
        cookies: Box<dyn CookieJar>,
    ) -> Result<Self, ClientError> {
        let http = Client::new();
        let backend = BackendClient::new(http.clone(), &config.backend_base_url)?;
        let site = Url::parse(&config.site_base_url)
            .map_err(|e| ClientError::Config(format!("Invalid site base URL: {e}")))?;
        Ok(Self {
            site,
            backend,
            http,
            storage,
            cookies,
            state: AuthState::Anonymous,
        })
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Load any persisted session from storage.
    ///
    /// Corrupted or partial storage is purged and yields the anonymous
    /// state, never an error.
    pub async fn init(&mut self) -> Result<(), ClientError> {
        self.state = self.read_persisted().await?;
        Ok(())
    }

    /// Re-run the init read, resynchronizing after external changes.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.init().await
    }

    /// Log in.
    ///
    /// Authenticates against the external backend for the profile and
    /// bearer token, then against the session endpoint for the signed
    /// cookie. Nothing is written until both calls have succeeded, so a
    /// failed login leaves no partial state behind.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Navigation, ClientError> {
        let profile = self.backend.admin_login(username, password).await?;
        let session_token = self.session_login(username, password).await?;

        let blob =
            serde_json::to_string(&profile).map_err(|e| ClientError::Storage(e.to_string()))?;
        self.storage.put(KEY_PROFILE, &blob).await?;
        self.storage.put(KEY_TOKEN, &profile.token).await?;
        self.cookies.set(
            SESSION_COOKIE_NAME.as_str(),
            &session_token,
            *SESSION_MAX_AGE as i64,
        );
        self.state = AuthState::Authenticated(profile);
        tracing::debug!("Client session established for user: {}", username);
        Ok(Navigation::to("/dashboard"))
    }

    /// Log out.
    ///
    /// Local cleanup always happens. The session endpoint is notified in
    /// the background and any failure there is ignored.
    pub async fn logout(&mut self) -> Result<Navigation, ClientError> {
        self.state = AuthState::Anonymous;
        self.purge_storage().await?;
        self.cookies.clear(SESSION_COOKIE_NAME.as_str());

        if let Ok(url) = self.route_url("logout") {
            let http = self.http.clone();
            tokio::spawn(async move {
                if let Err(e) = http.post(url).send().await {
                    tracing::debug!("Logout notification failed: {e}");
                }
            });
        }
        Ok(Navigation::to("/login"))
    }

    fn route_url(&self, endpoint: &str) -> Result<Url, ClientError> {
        self.site
            .join(&format!("{}/{}", FOLIO_ROUTE_PREFIX.as_str(), endpoint))
            .map_err(|e| ClientError::Config(format!("Invalid session endpoint URL: {e}")))
    }

    async fn session_login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(self.route_url("login")?)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Session {
                status: status.as_u16(),
            });
        }

        let prefix = format!("{}=", SESSION_COOKIE_NAME.as_str());
        for value in response.headers().get_all(reqwest::header::SET_COOKIE) {
            let Ok(cookie) = value.to_str() else { continue };
            if let Some(rest) = cookie.strip_prefix(&prefix) {
                let token = rest.split_once(';').map(|(v, _)| v).unwrap_or(rest).trim();
                if !token.is_empty() {
                    return Ok(token.to_string());
                }
            }
        }
        Err(ClientError::Response(
            "Login response did not set a session cookie".to_string(),
        ))
    }

    async fn read_persisted(&self) -> Result<AuthState, ClientError> {
        let profile = self.storage.get(KEY_PROFILE).await?;
        let token = self.storage.get(KEY_TOKEN).await?;

        let (profile, token) = match (profile, token) {
            (Some(profile), Some(token)) => (profile, token),
            (None, None) => return Ok(AuthState::Anonymous),
            // One key without the other is a leftover, clean it up.
            _ => {
                self.purge_storage().await?;
                return Ok(AuthState::Anonymous);
            }
        };

        if profile == CORRUPT_SENTINEL || token == CORRUPT_SENTINEL {
            tracing::debug!("Purging corrupted client session storage");
            self.purge_storage().await?;
            return Ok(AuthState::Anonymous);
        }

        match serde_json::from_str::<AdminProfile>(&profile) {
            Ok(mut admin) => {
                admin.token = token;
                Ok(AuthState::Authenticated(admin))
            }
            Err(_) => {
                tracing::debug!("Purging unparseable client session storage");
                self.purge_storage().await?;
                Ok(AuthState::Anonymous)
            }
        }
    }

    async fn purge_storage(&self) -> Result<(), ClientError> {
        self.storage.remove(KEY_PROFILE).await?;
        self.storage.remove(KEY_TOKEN).await?;
        Ok(())
    }
}
