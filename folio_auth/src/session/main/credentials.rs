use subtle::ConstantTimeEq;

use crate::session::config::{AUTH_PASSWORD, AUTH_USERNAME};

/// Check a login attempt against the configured operator credentials.
///
/// Both comparisons run in constant time and both always run, so timing
/// does not reveal which of the two fields was wrong.
pub fn validate_credentials(username: &str, password: &str) -> bool {
    let user_ok: bool = username.as_bytes().ct_eq(AUTH_USERNAME.as_bytes()).into();
    let pass_ok: bool = password.as_bytes().ct_eq(AUTH_PASSWORD.as_bytes()).into();
    user_ok & pass_ok
}
