//! Integration tests for the Redis TTL store
//!
//! These tests need a running Redis instance; point `REDIS_URL` at it and
//! run with `cargo test -- --ignored`.

use std::collections::HashMap;
use std::sync::Arc;

use qp_core::repositories::MockUserRepository;
use qp_core::services::auth::{code_key, AuthService};
use qp_core::store::TtlStore;
use qp_infra::{LogSmsSender, RedisStore};
use qp_shared::config::{AuthConfig, CacheConfig};

async fn connect() -> RedisStore {
    let config = CacheConfig::from_env();
    RedisStore::connect(&config)
        .await
        .expect("Redis must be reachable for integration tests")
}

#[tokio::test]
#[ignore] // Requires a running Redis instance
async fn test_set_get_delete_round_trip() {
    let store = connect().await;

    store.set("it:code", "482913", 60).await.unwrap();
    assert_eq!(store.get("it:code").await.unwrap(), Some("482913".to_string()));

    let ttl = store.ttl("it:code").await.unwrap().unwrap();
    assert!(ttl > 0 && ttl <= 60);

    assert!(store.delete("it:code").await.unwrap());
    assert_eq!(store.get("it:code").await.unwrap(), None);
    assert!(!store.delete("it:code").await.unwrap());
}

#[tokio::test]
#[ignore] // Requires a running Redis instance
async fn test_hash_round_trip_with_expiry() {
    let store = connect().await;

    let mut fields = HashMap::new();
    fields.insert("id".to_string(), "42".to_string());
    fields.insert("nickname".to_string(), "user_abc123XYZ0".to_string());

    store.hash_set_all("it:session", &fields).await.unwrap();
    assert!(store.expire("it:session", 120).await.unwrap());

    let restored = store.hash_get_all("it:session").await.unwrap();
    assert_eq!(restored, fields);

    store.delete("it:session").await.unwrap();
    assert!(store.hash_get_all("it:session").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore] // Requires a running Redis instance
async fn test_health_check() {
    let store = connect().await;
    assert!(store.health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires a running Redis instance
async fn test_full_login_flow_against_redis() {
    let store = Arc::new(connect().await);
    let service = AuthService::new(
        Arc::new(LogSmsSender::new()),
        store.clone(),
        Arc::new(MockUserRepository::new()),
        AuthConfig::default(),
    );

    let phone = "13800000000";
    service.send_code(phone).await.unwrap();
    let code = store.get(&code_key(phone)).await.unwrap().unwrap();

    let token = service.login(phone, &code).await.unwrap();
    assert!(!token.is_empty());

    let session = service.fetch_session(&token).await.unwrap().unwrap();
    assert!(!session.nickname.is_empty());

    // The code was consumed by the successful login
    assert_eq!(store.get(&code_key(phone)).await.unwrap(), None);
}
