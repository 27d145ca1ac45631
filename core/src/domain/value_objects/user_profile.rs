//! Sanitized user projection stored as session data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Field names of the flattened session entry
const FIELD_ID: &str = "id";
const FIELD_NICKNAME: &str = "nickname";
const FIELD_ICON: &str = "icon";

/// Sanitized view of a user, safe to hand to clients
///
/// This is the payload stored under a session token. Sensitive fields
/// (password, raw phone) are stripped before the projection is built; the
/// session store only ever sees what a client is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier of the user
    pub id: Uuid,

    /// Display name
    pub nickname: String,

    /// Avatar URL, if set
    pub icon: Option<String>,
}

impl UserProfile {
    /// Flatten the profile into the string field map the session store expects
    ///
    /// Absent optional fields are omitted rather than stored as empty values.
    pub fn to_field_map(&self) -> HashMap<String, String> {
        let mut fields = HashMap::new();
        fields.insert(FIELD_ID.to_string(), self.id.to_string());
        fields.insert(FIELD_NICKNAME.to_string(), self.nickname.clone());
        if let Some(icon) = &self.icon {
            fields.insert(FIELD_ICON.to_string(), icon.clone());
        }
        fields
    }

    /// Reconstruct a profile from a stored field map
    ///
    /// Returns `None` when mandatory fields are missing or malformed, which
    /// is how an expired-then-rewritten or foreign entry surfaces.
    pub fn from_field_map(fields: &HashMap<String, String>) -> Option<Self> {
        let id = Uuid::parse_str(fields.get(FIELD_ID)?).ok()?;
        let nickname = fields.get(FIELD_NICKNAME)?.clone();
        let icon = fields.get(FIELD_ICON).cloned();
        Some(Self { id, nickname, icon })
    }
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            nickname: user.nickname.clone(),
            icon: user.icon.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let mut user = User::new("13800000000".to_string(), "user_k3J9mQx7Lz".to_string());
        user.password = Some("bcrypt-hash".to_string());
        user
    }

    #[test]
    fn test_projection_strips_sensitive_fields() {
        let user = sample_user();
        let profile = UserProfile::from(&user);
        let fields = profile.to_field_map();

        assert!(!fields.contains_key("password"));
        assert!(!fields.contains_key("phone"));
        assert_eq!(fields.get("nickname").unwrap(), "user_k3J9mQx7Lz");
    }

    #[test]
    fn test_absent_icon_is_omitted() {
        let profile = UserProfile::from(&sample_user());
        let fields = profile.to_field_map();
        assert!(!fields.contains_key("icon"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_field_map_round_trip() {
        let mut user = sample_user();
        user.set_icon("https://cdn.example.com/a.png".to_string());
        let profile = UserProfile::from(&user);

        let restored = UserProfile::from_field_map(&profile.to_field_map()).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_from_field_map_rejects_missing_fields() {
        let mut fields = HashMap::new();
        fields.insert("nickname".to_string(), "nick".to_string());
        assert!(UserProfile::from_field_map(&fields).is_none());

        let mut fields = HashMap::new();
        fields.insert("id".to_string(), "not-a-uuid".to_string());
        fields.insert("nickname".to_string(), "nick".to_string());
        assert!(UserProfile::from_field_map(&fields).is_none());
    }
}
