//! Store key namespacing for login state
//!
//! Codes and sessions live in the same store; the prefixes keep the two
//! keyspaces (and anything else sharing the store) from colliding.

/// Prefix for per-phone verification code entries
pub const LOGIN_CODE_KEY: &str = "login:code:";

/// Prefix for per-token session entries
pub const LOGIN_TOKEN_KEY: &str = "login:token:";

/// Key of the verification code entry for a phone number
pub fn code_key(phone: &str) -> String {
    format!("{}{}", LOGIN_CODE_KEY, phone)
}

/// Key of the session entry for a token
pub fn token_key(token: &str) -> String {
    format!("{}{}", LOGIN_TOKEN_KEY, token)
}
