use serde::{Deserialize, Serialize};

/// Claims carried by a signed session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Operator login name the session was issued for
    pub username: String,
    /// Expiry as a unix timestamp in seconds
    pub exp: i64,
}
