use super::PushSubscription;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum PushDeliveryError {
    /// The push service no longer knows this endpoint (HTTP 404/410)
    #[error("subscription is gone")]
    Gone,
    #[error("delivery rejected: {0}")]
    Rejected(String),
}

/// Delivers one encrypted message to one browser subscription
#[async_trait]
pub trait PushGateway: Send + Sync {
    /// Application server key handed to browsers when they subscribe
    fn public_key(&self) -> &str;

    async fn deliver(
        &self,
        subscription: &PushSubscription,
        payload: &[u8],
    ) -> Result<(), PushDeliveryError>;
}
