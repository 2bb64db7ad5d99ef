use super::{
    LiveChannel, TrendingQuery, TrendingVideo, VideoCategory, YouTubeApi, YouTubeServiceError,
    NEWS_CHANNELS, VIDEO_CATEGORIES,
};
use futures::future::join_all;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

pub struct YouTubeService {
    api: Option<Arc<dyn YouTubeApi>>,
    trending_cache: Cache<(String, String, u32), Arc<Vec<TrendingVideo>>>,
}

impl YouTubeService {
    /// `api` is absent when no API key is configured
    pub fn new(api: Option<Arc<dyn YouTubeApi>>, cache_ttl: Duration) -> Self {
        Self {
            api,
            trending_cache: Cache::builder()
                .max_capacity(64)
                .time_to_live(cache_ttl)
                .build(),
        }
    }

    pub fn categories(&self) -> Vec<VideoCategory> {
        VIDEO_CATEGORIES
            .iter()
            .map(|(id, title)| VideoCategory {
                id: id.to_string(),
                title: title.to_string(),
            })
            .collect()
    }

    /// Static channel list, each checked for a running broadcast when the
    /// API is available. A failed check reports the channel as offline.
    pub async fn live_channels(&self) -> Vec<LiveChannel> {
        let Some(api) = &self.api else {
            return NEWS_CHANNELS.iter().map(LiveChannel::offline).collect();
        };

        let checks = NEWS_CHANNELS.iter().map(|channel| {
            let api = Arc::clone(api);
            async move {
                let mut entry = LiveChannel::offline(channel);
                match api.live_video(channel.channel_id).await {
                    Ok(live) => {
                        entry.is_live = live.is_some();
                        entry.live_video = live;
                    }
                    Err(e) => {
                        tracing::warn!(channel = channel.name, error = %e, "Live check failed");
                    }
                }
                entry
            }
        });

        join_all(checks).await
    }

    pub async fn trending(
        &self,
        query: &TrendingQuery,
    ) -> Result<Arc<Vec<TrendingVideo>>, YouTubeServiceError> {
        let api = self.api.as_ref().ok_or(YouTubeServiceError::NotConfigured)?;
        let key = query.resolve();

        if let Some(videos) = self.trending_cache.get(&key).await {
            return Ok(videos);
        }

        let (region, category, max) = &key;
        let videos = Arc::new(api.trending(region, category, *max).await?);
        tracing::debug!(region = %region, category = %category, count = videos.len(), "Fetched trending videos");

        self.trending_cache.insert(key, Arc::clone(&videos)).await;
        Ok(videos)
    }
}
