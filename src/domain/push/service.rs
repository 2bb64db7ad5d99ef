use super::{
    default_topics, BroadcastReport, BroadcastRequest, PushDeliveryError, PushGateway,
    PushPayload, PushServiceError, PushStats, PushSubscription, SubscribeRequest,
};
use crate::infrastructure::repositories::SubscriptionRepository;
use chrono::Utc;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;

pub struct PushService {
    repository: Arc<dyn SubscriptionRepository>,
    gateway: Option<Arc<dyn PushGateway>>,
}

enum Outcome {
    Sent,
    Failed,
    Gone(String),
}

impl PushService {
    pub fn new(
        repository: Arc<dyn SubscriptionRepository>,
        gateway: Option<Arc<dyn PushGateway>>,
    ) -> Self {
        Self {
            repository,
            gateway,
        }
    }

    pub fn public_key(&self) -> Result<String, PushServiceError> {
        self.gateway
            .as_ref()
            .map(|gateway| gateway.public_key().to_string())
            .ok_or(PushServiceError::Unavailable)
    }

    pub async fn subscribe(
        &self,
        request: SubscribeRequest,
    ) -> Result<PushSubscription, PushServiceError> {
        if !request.endpoint.starts_with("https://") && !request.endpoint.starts_with("http://") {
            return Err(PushServiceError::Invalid(
                "Invalid subscription endpoint".to_string(),
            ));
        }
        if request.keys.p256dh.trim().is_empty() || request.keys.auth.trim().is_empty() {
            return Err(PushServiceError::Invalid(
                "Subscription keys are required".to_string(),
            ));
        }

        let subscription = PushSubscription {
            endpoint: request.endpoint,
            keys: request.keys,
            topics: normalize_topics(request.topics),
            created_at: Utc::now(),
        };

        let created = self
            .repository
            .upsert(subscription.clone())
            .await
            .map_err(|e| PushServiceError::Dependency(e.to_string()))?;

        tracing::info!(
            topics = ?subscription.topics,
            created,
            "Push subscription stored"
        );
        Ok(subscription)
    }

    /// Returns whether a subscription was actually removed
    pub async fn unsubscribe(&self, endpoint: &str) -> Result<bool, PushServiceError> {
        self.repository
            .remove(endpoint)
            .await
            .map_err(|e| PushServiceError::Dependency(e.to_string()))
    }

    pub async fn update_topics(
        &self,
        endpoint: &str,
        topics: Vec<String>,
    ) -> Result<PushSubscription, PushServiceError> {
        self.repository
            .update_topics(endpoint, normalize_topics(Some(topics)))
            .await
            .map_err(|e| PushServiceError::Dependency(e.to_string()))?
            .ok_or(PushServiceError::NotFound)
    }

    pub async fn stats(&self) -> Result<PushStats, PushServiceError> {
        let subscriptions = self
            .repository
            .list()
            .await
            .map_err(|e| PushServiceError::Dependency(e.to_string()))?;

        let mut stats = PushStats {
            total: subscriptions.len(),
            ..Default::default()
        };
        for topic in subscriptions.iter().flat_map(|s| s.topics.iter()) {
            *stats.topics.entry(topic.clone()).or_default() += 1;
        }
        Ok(stats)
    }

    /// Send one message to every matching subscriber concurrently.
    ///
    /// Per-subscriber failures are counted, never propagated. Endpoints the
    /// push service reports as gone are removed from the repository.
    pub async fn broadcast(
        &self,
        request: BroadcastRequest,
    ) -> Result<BroadcastReport, PushServiceError> {
        let gateway = self.gateway.clone().ok_or(PushServiceError::Unavailable)?;

        if request.title.trim().is_empty() {
            return Err(PushServiceError::Invalid("Title is required".to_string()));
        }

        let subscriptions: Vec<PushSubscription> = self
            .repository
            .list()
            .await
            .map_err(|e| PushServiceError::Dependency(e.to_string()))?
            .into_iter()
            .filter(|s| s.wants(request.topic.as_deref()))
            .collect();

        let payload = PushPayload {
            title: request.title,
            body: request.body.unwrap_or_default(),
            url: request.url,
            icon: request.icon,
            data: request.data,
            timestamp: Utc::now().timestamp_millis(),
        };
        let payload = serde_json::to_vec(&payload)
            .map_err(|e| PushServiceError::Dependency(e.to_string()))?;

        let mut report = BroadcastReport {
            total: subscriptions.len(),
            ..Default::default()
        };

        let mut deliveries: FuturesUnordered<_> = subscriptions
            .iter()
            .map(|subscription| {
                let gateway = gateway.clone();
                let payload = payload.as_slice();
                async move {
                    match gateway.deliver(subscription, payload).await {
                        Ok(()) => Outcome::Sent,
                        Err(PushDeliveryError::Gone) => {
                            Outcome::Gone(subscription.endpoint.clone())
                        }
                        Err(PushDeliveryError::Rejected(reason)) => {
                            tracing::warn!(
                                endpoint = %subscription.endpoint,
                                reason = %reason,
                                "Push delivery failed"
                            );
                            Outcome::Failed
                        }
                    }
                }
            })
            .collect();

        let mut gone = Vec::new();
        while let Some(outcome) = deliveries.next().await {
            match outcome {
                Outcome::Sent => report.sent += 1,
                Outcome::Failed => report.failed += 1,
                Outcome::Gone(endpoint) => {
                    report.failed += 1;
                    gone.push(endpoint);
                }
            }
        }
        drop(deliveries);

        if !gone.is_empty() {
            report.removed = self
                .repository
                .remove_many(&gone)
                .await
                .map_err(|e| PushServiceError::Dependency(e.to_string()))?;
        }

        tracing::info!(
            total = report.total,
            sent = report.sent,
            failed = report.failed,
            removed = report.removed,
            "Push broadcast finished"
        );
        Ok(report)
    }
}

fn normalize_topics(topics: Option<Vec<String>>) -> Vec<String> {
    let mut normalized: Vec<String> = topics
        .unwrap_or_default()
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    normalized.sort();
    normalized.dedup();
    if normalized.is_empty() {
        default_topics()
    } else {
        normalized
    }
}
