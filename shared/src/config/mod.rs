//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Login code and session lifetimes, nickname generation
//! - `cache` - TTL store (Redis) configuration
//! - `database` - Database connection and pool configuration

pub mod auth;
pub mod cache;
pub mod database;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
