mod credentials;
mod session;
mod token;

pub use credentials::validate_credentials;
pub use session::{
    get_session_token_from_headers, issue_session, issue_session_headers, prepare_logout_response,
    verify_session, verify_session_at,
};
pub use token::{decode_token, encode_token};
