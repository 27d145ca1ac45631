//! User repository trait defining the interface for user data persistence.
//!
//! The repository is an external collaborator: a keyed lookup/insert service
//! over permanent user records. Implementations handle the actual database
//! access while the login flow stays storage-agnostic.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use qp_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_phone("13800000000").await? {
///     Some(user) => println!("User found: {}", user.id),
///     None => println!("User not found"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact phone number match
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this phone
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// Implementations enforce phone uniqueness; a losing concurrent insert
    /// surfaces as `DomainError::Duplicate` so the caller can fall back to
    /// fetching the winner's record.
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError::Duplicate)` - Phone already registered
    /// * `Err(DomainError)` - Insert failed
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
