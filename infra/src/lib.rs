//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborator interfaces defined in
//! `qp_core`:
//! - **Cache**: Redis-backed TTL store for codes and sessions
//! - **Database**: MySQL user repository using SQLx
//! - **SMS**: log-based code delivery for development and testing

pub mod cache;
pub mod database;
pub mod sms;

pub use cache::RedisStore;
pub use database::MySqlUserRepository;
pub use sms::LogSmsSender;

/// Infrastructure-specific error types
///
/// Covers construction and connection failures. Operational errors cross the
/// collaborator trait boundaries as strings and are wrapped into domain
/// errors by the service layer.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
