use super::json_store::JsonFileStore;
use crate::domain::push::PushSubscription;
use crate::error::AppResult;
use async_trait::async_trait;
use std::path::PathBuf;

/// The single persistence boundary for Web Push subscriptions
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<PushSubscription>>;

    /// Insert, or replace keys and topics of a known endpoint.
    /// Returns `true` when the endpoint was new.
    async fn upsert(&self, subscription: PushSubscription) -> AppResult<bool>;

    async fn remove(&self, endpoint: &str) -> AppResult<bool>;

    /// Returns how many subscriptions were dropped
    async fn remove_many(&self, endpoints: &[String]) -> AppResult<usize>;

    async fn update_topics(
        &self,
        endpoint: &str,
        topics: Vec<String>,
    ) -> AppResult<Option<PushSubscription>>;
}

pub struct JsonSubscriptionRepository {
    store: JsonFileStore<Vec<PushSubscription>>,
}

impl JsonSubscriptionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

#[async_trait]
impl SubscriptionRepository for JsonSubscriptionRepository {
    async fn list(&self) -> AppResult<Vec<PushSubscription>> {
        self.store.load().await
    }

    async fn upsert(&self, subscription: PushSubscription) -> AppResult<bool> {
        self.store
            .update(|subscriptions| {
                match subscriptions
                    .iter_mut()
                    .find(|s| s.endpoint == subscription.endpoint)
                {
                    Some(existing) => {
                        existing.keys = subscription.keys;
                        existing.topics = subscription.topics;
                        false
                    }
                    None => {
                        subscriptions.push(subscription);
                        true
                    }
                }
            })
            .await
    }

    async fn remove(&self, endpoint: &str) -> AppResult<bool> {
        self.store
            .update(|subscriptions| {
                let before = subscriptions.len();
                subscriptions.retain(|s| s.endpoint != endpoint);
                subscriptions.len() != before
            })
            .await
    }

    async fn remove_many(&self, endpoints: &[String]) -> AppResult<usize> {
        if endpoints.is_empty() {
            return Ok(0);
        }
        self.store
            .update(|subscriptions| {
                let before = subscriptions.len();
                subscriptions.retain(|s| !endpoints.contains(&s.endpoint));
                before - subscriptions.len()
            })
            .await
    }

    async fn update_topics(
        &self,
        endpoint: &str,
        topics: Vec<String>,
    ) -> AppResult<Option<PushSubscription>> {
        self.store
            .update(|subscriptions| {
                subscriptions
                    .iter_mut()
                    .find(|s| s.endpoint == endpoint)
                    .map(|subscription| {
                        subscription.topics = topics;
                        subscription.clone()
                    })
            })
            .await
    }
}
