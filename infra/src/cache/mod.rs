//! Redis caching layer
//!
//! Provides the production implementation of the TTL store interface.

pub mod redis_store;

pub use redis_store::RedisStore;
