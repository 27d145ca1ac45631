//! # QuickPass Core
//!
//! Core business logic and domain layer for the QuickPass backend.
//! This crate contains domain entities, the phone-code login service,
//! collaborator interfaces (TTL store, user repository, code delivery),
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
pub mod store;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
pub use store::*;
