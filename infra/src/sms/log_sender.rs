//! Log-based code delivery
//!
//! Writes the verification code to the log instead of sending an SMS. The
//! code is only emitted at debug level; normal log levels see the masked
//! phone number and a message id, nothing secret.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use qp_core::services::auth::CodeDelivery;
use qp_shared::utils::phone::mask_phone_number;

/// Code delivery that logs instead of sending
#[derive(Clone)]
pub struct LogSmsSender {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
}

impl LogSmsSender {
    /// Create a new log delivery channel
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a channel that fails every delivery (for testing)
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of messages delivered
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for LogSmsSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeDelivery for LogSmsSender {
    async fn deliver(&self, phone: &str, code: &str) -> Result<String, String> {
        let masked = mask_phone_number(phone);

        if self.simulate_failure {
            warn!(
                phone = %masked,
                "Log delivery simulating failure"
            );
            return Err("simulated delivery failure".to_string());
        }

        let message_id = format!("log_{}", Uuid::new_v4());
        self.message_count.fetch_add(1, Ordering::SeqCst);

        info!(
            target: "sms_service",
            provider = "log",
            phone = %masked,
            message_id = %message_id,
            "Verification SMS dispatched (log delivery)"
        );
        debug!(
            phone = %masked,
            code = %code,
            "Verification code for development use"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deliver_returns_message_id() {
        let sender = LogSmsSender::new();
        let message_id = sender.deliver("13800000000", "123456").await.unwrap();
        assert!(message_id.starts_with("log_"));
        assert_eq!(sender.message_count(), 1);
    }

    #[tokio::test]
    async fn test_deliver_counts_messages() {
        let sender = LogSmsSender::new();
        for _ in 0..3 {
            sender.deliver("13800000000", "123456").await.unwrap();
        }
        assert_eq!(sender.message_count(), 3);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let sender = LogSmsSender::failing();
        let result = sender.deliver("13800000000", "123456").await;
        assert!(result.is_err());
        assert_eq!(sender.message_count(), 0);
    }
}
