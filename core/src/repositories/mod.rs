//! Repository interfaces for permanent state.

pub mod user;

pub use user::{MockUserRepository, UserRepository};
