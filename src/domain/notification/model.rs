use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FCM topic message as accepted by `POST /api/notifications/send`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TopicMessage {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, String>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendNotificationResponse {
    pub success: bool,
    pub message_id: String,
}
