//! Phone-code authentication flow
//!
//! Two operations with the TTL store as the only synchronization point:
//! `send_code` issues a short-lived one-time code, `login` trades a valid
//! code for a fresh session token. Each invocation is a stateless
//! request-handler execution.

mod keys;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use keys::{code_key, token_key, LOGIN_CODE_KEY, LOGIN_TOKEN_KEY};
pub use service::{AuthService, CODE_LENGTH};
pub use traits::CodeDelivery;
