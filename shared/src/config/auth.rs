//! Authentication flow configuration

use serde::{Deserialize, Serialize};

/// Default lifetime of a verification code (5 minutes)
const DEFAULT_CODE_TTL_SECONDS: u64 = 300;

/// Default lifetime of a login session (30 minutes)
const DEFAULT_SESSION_TTL_SECONDS: u64 = 1800;

/// Default prefix for auto-generated nicknames
const DEFAULT_NICKNAME_PREFIX: &str = "user_";

/// Default length of the random nickname suffix
const DEFAULT_NICKNAME_SUFFIX_LEN: usize = 10;

/// Configuration for the phone-code login flow
///
/// The session TTL must stay longer than the code TTL: codes are single-use
/// credentials, sessions are what they buy.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Seconds before a stored verification code expires
    #[serde(default = "default_code_ttl")]
    pub code_ttl_seconds: u64,

    /// Seconds before a stored session expires
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,

    /// Prefix for nicknames assigned to auto-registered users
    #[serde(default = "default_nickname_prefix")]
    pub nickname_prefix: String,

    /// Length of the random alphanumeric nickname suffix
    #[serde(default = "default_suffix_len")]
    pub nickname_suffix_len: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl(),
            session_ttl_seconds: default_session_ttl(),
            nickname_prefix: default_nickname_prefix(),
            nickname_suffix_len: default_suffix_len(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let code_ttl_seconds = std::env::var("LOGIN_CODE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_code_ttl);
        let session_ttl_seconds = std::env::var("LOGIN_SESSION_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_session_ttl);
        let nickname_prefix = std::env::var("NICKNAME_PREFIX")
            .unwrap_or_else(|_| default_nickname_prefix());

        Self {
            code_ttl_seconds,
            session_ttl_seconds,
            nickname_prefix,
            ..Default::default()
        }
    }

    /// Override the code lifetime
    pub fn with_code_ttl(mut self, seconds: u64) -> Self {
        self.code_ttl_seconds = seconds;
        self
    }

    /// Override the session lifetime
    pub fn with_session_ttl(mut self, seconds: u64) -> Self {
        self.session_ttl_seconds = seconds;
        self
    }
}

fn default_code_ttl() -> u64 {
    DEFAULT_CODE_TTL_SECONDS
}

fn default_session_ttl() -> u64 {
    DEFAULT_SESSION_TTL_SECONDS
}

fn default_nickname_prefix() -> String {
    DEFAULT_NICKNAME_PREFIX.to_string()
}

fn default_suffix_len() -> usize {
    DEFAULT_NICKNAME_SUFFIX_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_default() {
        let config = AuthConfig::default();
        assert_eq!(config.code_ttl_seconds, 300);
        assert_eq!(config.session_ttl_seconds, 1800);
        assert_eq!(config.nickname_prefix, "user_");
        assert_eq!(config.nickname_suffix_len, 10);
    }

    #[test]
    fn test_session_outlives_code() {
        let config = AuthConfig::default();
        assert!(config.session_ttl_seconds > config.code_ttl_seconds);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AuthConfig::default()
            .with_code_ttl(120)
            .with_session_ttl(3600);
        assert_eq!(config.code_ttl_seconds, 120);
        assert_eq!(config.session_ttl_seconds, 3600);
    }
}
