use serde::{Deserialize, Serialize};

/// Admin profile as returned by the external backend and cached client-side.
///
/// `token` is the backend-issued bearer token, stored under its own key and
/// re-attached to the profile on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing)]
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Client-side view of the authentication state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    Authenticated(AdminProfile),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }
}

/// Full-page navigation the caller is expected to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub target: String,
}

impl Navigation {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_token_not_serialized() {
        let profile = AdminProfile {
            id: "1".to_string(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            token: "secret-bearer".to_string(),
            title: None,
            avatar_url: None,
            phone: None,
            address: None,
            website: None,
            bio: None,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("secret-bearer"));
        assert!(!json.contains("avatarUrl"));

        let back: AdminProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token, "");
        assert_eq!(back.name, "Admin");
    }

    #[test]
    fn test_profile_optional_fields() {
        let json = r#"{"id":"7","name":"Admin","email":"a@b.c","avatarUrl":"/me.png"}"#;
        let profile: AdminProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.avatar_url.as_deref(), Some("/me.png"));
        assert_eq!(profile.title, None);
        assert_eq!(profile.token, "");
    }
}
