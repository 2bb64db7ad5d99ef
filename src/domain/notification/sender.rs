use super::{NotificationError, TopicMessage};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver a topic message, returning the backend's message id
    async fn send(&self, message: &TopicMessage) -> Result<String, NotificationError>;
}

/// Used when no Firebase credentials are configured. Logs the message and
/// hands back a made-up id so callers behave the same in development.
pub struct NullSender;

#[async_trait]
impl NotificationSender for NullSender {
    async fn send(&self, message: &TopicMessage) -> Result<String, NotificationError> {
        let message_id = format!("mock-{}", Uuid::new_v4());
        tracing::info!(
            topic = %message.topic,
            title = %message.title,
            message_id = %message_id,
            "Firebase not configured, notification logged only"
        );
        Ok(message_id)
    }
}
