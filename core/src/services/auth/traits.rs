//! Trait for the out-of-band code delivery channel

use async_trait::async_trait;

/// Trait for delivering one-time codes to the phone's owner
///
/// The code travels out-of-band (SMS, email, a log line in development); it
/// never appears in an API response. The login flow treats delivery as
/// fire-and-forget: a delivery failure is logged, not surfaced.
#[async_trait]
pub trait CodeDelivery: Send + Sync {
    /// Deliver a verification code, returning a provider message id
    async fn deliver(&self, phone: &str, code: &str) -> Result<String, String>;
}
