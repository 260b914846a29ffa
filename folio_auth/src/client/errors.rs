use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The external backend rejected the admin login
    #[error("Backend login failed with status {status}")]
    Backend { status: u16 },

    /// The internal session endpoint rejected the login
    #[error("Session login failed with status {status}")]
    Session { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unexpected response: {0}")]
    Response(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}
