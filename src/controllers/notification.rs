use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    controllers::extract::ApiJson,
    domain::notification::{NotificationService, SendNotificationResponse, TopicMessage},
    domain::push::{PushService, UpdateTopicsRequest},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct NotificationController {
    notification_service: Arc<NotificationService>,
    push_service: Arc<PushService>,
}

impl NotificationController {
    pub fn new(
        notification_service: Arc<NotificationService>,
        push_service: Arc<PushService>,
    ) -> Self {
        Self {
            notification_service,
            push_service,
        }
    }

    /// POST /api/notifications/send - FCM topic message (admin)
    pub async fn send(
        State(controller): State<Arc<NotificationController>>,
        Extension(auth_user): Extension<AuthUser>,
        ApiJson(message): ApiJson<TopicMessage>,
    ) -> AppResult<Json<SendNotificationResponse>> {
        tracing::info!(admin = %auth_user.username, topic = %message.topic, "Notification requested");
        let response = controller.notification_service.send(message).await?;
        Ok(Json(response))
    }

    /// PUT /api/notifications/preferences - Change a subscription's topics
    pub async fn update_preferences(
        State(controller): State<Arc<NotificationController>>,
        ApiJson(request): ApiJson<UpdateTopicsRequest>,
    ) -> AppResult<Json<Value>> {
        let subscription = controller
            .push_service
            .update_topics(&request.endpoint, request.topics)
            .await?;
        Ok(Json(json!({
            "success": true,
            "topics": subscription.topics,
        })))
    }
}
