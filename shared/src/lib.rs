//! Shared utilities and common types for the QuickPass server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response structures
//! - Utility functions (phone validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, CacheConfig, DatabaseConfig};
pub use types::ApiResponse;
pub use utils::phone;
