use super::{NotificationSender, NotificationServiceError, SendNotificationResponse, TopicMessage};
use std::sync::Arc;

pub struct NotificationService {
    sender: Arc<dyn NotificationSender>,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }

    pub async fn send(
        &self,
        mut message: TopicMessage,
    ) -> Result<SendNotificationResponse, NotificationServiceError> {
        message.topic = message.topic.trim().to_string();
        if message.topic.is_empty() {
            return Err(NotificationServiceError::Invalid(
                "Topic is required".to_string(),
            ));
        }
        if message.title.trim().is_empty() {
            return Err(NotificationServiceError::Invalid(
                "Title is required".to_string(),
            ));
        }

        let message_id = self.sender.send(&message).await.map_err(|e| {
            tracing::error!(topic = %message.topic, error = %e, "Notification delivery failed");
            e
        })?;

        tracing::info!(topic = %message.topic, message_id = %message_id, "Notification sent");
        Ok(SendNotificationResponse {
            success: true,
            message_id,
        })
    }
}
