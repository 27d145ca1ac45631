//! Main authentication service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

use qp_shared::config::AuthConfig;
use qp_shared::utils::phone::{is_valid_mobile, mask_phone_number};

use crate::domain::entities::user::User;
use crate::domain::value_objects::UserProfile;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::store::TtlStore;

use super::keys::{code_key, token_key};
use super::traits::CodeDelivery;

/// Length of the one-time verification code
pub const CODE_LENGTH: usize = 6;

/// Authentication service for the phone-code login flow
///
/// Generic over its three collaborators so tests can substitute in-memory
/// doubles for the store, the repository, and the delivery channel.
pub struct AuthService<D, S, U>
where
    D: CodeDelivery,
    S: TtlStore,
    U: UserRepository,
{
    /// Out-of-band delivery channel for codes
    delivery: Arc<D>,
    /// TTL store holding codes and sessions
    store: Arc<S>,
    /// Repository for permanent user records
    user_repository: Arc<U>,
    /// Service configuration
    config: AuthConfig,
}

impl<D, S, U> AuthService<D, S, U>
where
    D: CodeDelivery,
    S: TtlStore,
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        delivery: Arc<D>,
        store: Arc<S>,
        user_repository: Arc<U>,
        config: AuthConfig,
    ) -> Self {
        Self {
            delivery,
            store,
            user_repository,
            config,
        }
    }

    /// Issue a one-time verification code for a phone number
    ///
    /// This method:
    /// 1. Validates the phone number format (no store access on failure)
    /// 2. Generates a uniform random 6-digit code
    /// 3. Stores the code under the phone's key with the configured expiry,
    ///    overwriting any previous code for the same phone
    /// 4. Hands the code to the delivery channel
    ///
    /// The code is never part of the response; it only travels out-of-band.
    /// Delivery failures are logged and not surfaced.
    pub async fn send_code(&self, phone: &str) -> DomainResult<()> {
        if !is_valid_mobile(phone) {
            return Err(AuthError::InvalidPhoneFormat {
                phone: mask_phone_number(phone),
            }
            .into());
        }

        let code = Self::generate_code();

        self.store
            .set(&code_key(phone), &code, self.config.code_ttl_seconds)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "code_store_failed",
                    "Failed to store verification code"
                );
                DomainError::Store { message: e }
            })?;

        match self.delivery.deliver(phone, &code).await {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    message_id = %message_id,
                    event = "code_sent",
                    "Verification code dispatched"
                );
            }
            Err(e) => {
                // Fire-and-forget: the stored code is still valid, the client
                // can request a resend
                tracing::warn!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "code_delivery_failed",
                    "Verification code delivery failed"
                );
            }
        }

        Ok(())
    }

    /// Trade a valid verification code for a fresh session token
    ///
    /// Hard gates, in order; the first failure short-circuits with no side
    /// effects from later steps:
    /// 1. Validate the phone number format
    /// 2. Compare the presented code against the stored one; absence and
    ///    mismatch are the same error
    /// 3. Find the user, auto-registering on first login
    /// 4. Mint a token and write the sanitized session under it
    /// 5. Best-effort delete of the consumed code
    pub async fn login(&self, phone: &str, code: &str) -> DomainResult<String> {
        if !is_valid_mobile(phone) {
            return Err(AuthError::InvalidPhoneFormat {
                phone: mask_phone_number(phone),
            }
            .into());
        }

        let code_entry = code_key(phone);
        let stored = self
            .store
            .get(&code_entry)
            .await
            .map_err(|e| DomainError::Store { message: e })?;

        // Exact string equality, timing-safe; no normalization of either side
        let matches = stored
            .as_deref()
            .map(|s| constant_time_eq(s.as_bytes(), code.as_bytes()))
            .unwrap_or(false);
        if !matches {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                event = "code_mismatch",
                "Verification code missing or mismatched"
            );
            return Err(AuthError::CodeMismatch.into());
        }

        let user = match self.user_repository.find_by_phone(phone).await? {
            Some(user) => user,
            None => self.register_user(phone).await?,
        };

        let token = Uuid::new_v4().simple().to_string();
        let session_entry = token_key(&token);
        let profile = UserProfile::from(&user);

        self.store
            .hash_set_all(&session_entry, &profile.to_field_map())
            .await
            .map_err(|e| DomainError::Store { message: e })?;
        self.store
            .expire(&session_entry, self.config.session_ttl_seconds)
            .await
            .map_err(|e| DomainError::Store { message: e })?;

        // Best-effort cleanup; an undeleted code simply expires on its own
        if let Err(e) = self.store.delete(&code_entry).await {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                error = %e,
                event = "code_cleanup_failed",
                "Failed to delete consumed verification code"
            );
        }

        tracing::info!(
            phone = %mask_phone_number(phone),
            user_id = %user.id,
            event = "login_success",
            "Login succeeded, session established"
        );

        Ok(token)
    }

    /// Read back the session stored under a token
    ///
    /// Returns `None` when the session is absent or expired. Does not touch
    /// the entry's TTL; only a re-login refreshes a session.
    pub async fn fetch_session(&self, token: &str) -> DomainResult<Option<UserProfile>> {
        let fields = self
            .store
            .hash_get_all(&token_key(token))
            .await
            .map_err(|e| DomainError::Store { message: e })?;

        if fields.is_empty() {
            return Ok(None);
        }

        Ok(UserProfile::from_field_map(&fields))
    }

    /// Register a user on first login
    ///
    /// Loses gracefully under concurrent first logins for the same phone:
    /// a duplicate insert falls back to fetching the winner's record.
    async fn register_user(&self, phone: &str) -> DomainResult<User> {
        let nickname = format!(
            "{}{}",
            self.config.nickname_prefix,
            Self::random_suffix(self.config.nickname_suffix_len)
        );
        let user = User::new(phone.to_string(), nickname);

        match self.user_repository.create(user).await {
            Ok(user) => {
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    user_id = %user.id,
                    event = "user_registered",
                    "Auto-registered user on first login"
                );
                Ok(user)
            }
            Err(DomainError::Duplicate { .. }) => self
                .user_repository
                .find_by_phone(phone)
                .await?
                .ok_or_else(|| DomainError::Internal {
                    message: "user missing after duplicate insert".to_string(),
                }),
            Err(e) => Err(e),
        }
    }

    /// Generate a fixed-width 6-digit code, uniform over 000000-999999
    fn generate_code() -> String {
        let code: u32 = rand::thread_rng().gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Random alphanumeric suffix for auto-generated nicknames
    fn random_suffix(len: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }
}
