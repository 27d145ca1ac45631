//! In-memory implementation of the TTL store
//!
//! A process-local substitute for the external store, used by tests and
//! single-node development setups. Expiry is evaluated lazily on access;
//! stale entries are overwritten or purged by subsequent writes.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TtlStore;

#[derive(Debug, Clone)]
enum Value {
    Text(String),
    Fields(HashMap<String, String>),
}

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}

/// In-memory TTL store backed by a shared hash map
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn deadline(ttl_seconds: u64) -> Option<Instant> {
        Some(Instant::now() + Duration::from_secs(ttl_seconds))
    }
}

#[async_trait]
impl TtlStore for MemoryStore {
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: Value::Text(value.to_string()),
                expires_at: Self::deadline(ttl_seconds),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).and_then(|entry| {
            if entry.is_expired() {
                return None;
            }
            match &entry.value {
                Value::Text(value) => Some(value.clone()),
                Value::Fields(_) => None,
            }
        }))
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        let mut entries = self.entries.write().await;
        match entries.remove(key) {
            Some(entry) => Ok(!entry.is_expired()),
            None => Ok(false),
        }
    }

    async fn hash_set_all(
        &self,
        key: &str,
        fields: &HashMap<String, String>,
    ) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: Value::Fields(fields.clone()),
                expires_at: None,
            },
        );
        Ok(())
    }

    async fn hash_get_all(&self, key: &str) -> Result<HashMap<String, String>, String> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(|entry| match &entry.value {
                Value::Fields(fields) => Some(fields.clone()),
                Value::Text(_) => None,
            })
            .unwrap_or_default())
    }

    async fn expire(&self, key: &str, ttl_seconds: u64) -> Result<bool, String> {
        let mut entries = self.entries.write().await;
        match entries.get_mut(key) {
            Some(entry) if !entry.is_expired() => {
                entry.expires_at = Self::deadline(ttl_seconds);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn ttl(&self, key: &str) -> Result<Option<i64>, String> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .and_then(|entry| entry.expires_at)
            .map(|deadline| {
                let remaining = deadline.saturating_duration_since(Instant::now());
                remaining.as_secs_f64().ceil() as i64
            }))
    }
}
