//! User entity representing a registered account in the QuickPass system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// Accounts are created lazily: the first successful phone-code login for an
/// unseen number registers a user with an auto-generated nickname. Everything
/// beyond that (nickname edits, icons, passwords) belongs to account
/// management flows outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Mobile number the account was registered with
    pub phone: String,

    /// Display name; defaulted on auto-registration
    pub nickname: String,

    /// Credential hash for password login; sensitive, never projected
    /// into session data
    pub password: Option<String>,

    /// Avatar URL, if the user has set one
    pub icon: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance
    pub fn new(phone: String, nickname: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone,
            nickname,
            password: None,
            icon: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the nickname
    pub fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.updated_at = Utc::now();
    }

    /// Sets the avatar URL
    pub fn set_icon(&mut self, icon: String) {
        self.icon = Some(icon);
        self.updated_at = Utc::now();
    }
}
