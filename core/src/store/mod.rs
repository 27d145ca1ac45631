//! TTL key-value store abstraction
//!
//! The store is the single source of truth for login state: per-phone
//! verification codes (plain string values) and per-token sessions (string
//! field maps). Entries expire server-side; nothing in this crate runs its
//! own expiry sweeps. Implementations guarantee per-key atomicity for each
//! individual operation.

use std::collections::HashMap;

use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryStore;

/// Trait for the TTL key-value store collaborator
///
/// Errors cross this boundary as strings; the service layer wraps them into
/// domain errors. Implementations must be safe to share across request
/// handlers (`Send + Sync`).
#[async_trait]
pub trait TtlStore: Send + Sync {
    /// Store a string value under a key with an expiry in seconds
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Fetch a string value; `None` when the key is absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Delete a key, returning whether an entry was removed
    async fn delete(&self, key: &str) -> Result<bool, String>;

    /// Replace the field map stored under a key
    async fn hash_set_all(
        &self,
        key: &str,
        fields: &HashMap<String, String>,
    ) -> Result<(), String>;

    /// Fetch the field map under a key; empty when absent or expired
    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, String>;

    /// Set an expiry on an existing key, returning whether the key exists
    async fn expire(&self, key: &str, ttl_seconds: u64) -> Result<bool, String>;

    /// Remaining time-to-live in seconds; `None` when the key is absent or
    /// carries no expiry
    async fn ttl(&self, key: &str) -> Result<Option<i64>, String>;
}
