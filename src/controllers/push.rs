use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    controllers::extract::ApiJson,
    domain::push::{
        BroadcastReport, BroadcastRequest, PushService, PushStats, SubscribeRequest,
        UnsubscribeRequest,
    },
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct PushController {
    push_service: Arc<PushService>,
}

impl PushController {
    pub fn new(push_service: Arc<PushService>) -> Self {
        Self { push_service }
    }

    /// POST /api/push/subscribe
    pub async fn subscribe(
        State(controller): State<Arc<PushController>>,
        ApiJson(request): ApiJson<SubscribeRequest>,
    ) -> AppResult<(StatusCode, Json<Value>)> {
        let subscription = controller.push_service.subscribe(request).await?;
        Ok((
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "topics": subscription.topics,
            })),
        ))
    }

    /// POST /api/push/unsubscribe
    pub async fn unsubscribe(
        State(controller): State<Arc<PushController>>,
        ApiJson(request): ApiJson<UnsubscribeRequest>,
    ) -> AppResult<Json<Value>> {
        let removed = controller
            .push_service
            .unsubscribe(&request.endpoint)
            .await?;
        Ok(Json(json!({ "success": true, "removed": removed })))
    }

    /// POST /api/push/send - Broadcast to subscribers (admin)
    pub async fn send(
        State(controller): State<Arc<PushController>>,
        Extension(auth_user): Extension<AuthUser>,
        ApiJson(request): ApiJson<BroadcastRequest>,
    ) -> AppResult<Json<BroadcastReport>> {
        tracing::info!(
            admin = %auth_user.username,
            topic = ?request.topic,
            "Push broadcast requested"
        );
        let report = controller.push_service.broadcast(request).await?;
        Ok(Json(report))
    }

    /// GET /api/push/stats
    pub async fn stats(
        State(controller): State<Arc<PushController>>,
    ) -> AppResult<Json<PushStats>> {
        Ok(Json(controller.push_service.stats().await?))
    }

    /// GET /api/push/vapid-public-key
    pub async fn vapid_public_key(
        State(controller): State<Arc<PushController>>,
    ) -> AppResult<Json<Value>> {
        let public_key = controller.push_service.public_key()?;
        Ok(Json(json!({ "publicKey": public_key })))
    }
}
