use super::{LiveVideo, TrendingVideo, YouTubeError};
use async_trait::async_trait;

/// The slice of the YouTube Data API this service relies on
#[async_trait]
pub trait YouTubeApi: Send + Sync {
    async fn live_video(&self, channel_id: &str) -> Result<Option<LiveVideo>, YouTubeError>;

    async fn trending(
        &self,
        region_code: &str,
        category_id: &str,
        max_results: u32,
    ) -> Result<Vec<TrendingVideo>, YouTubeError>;
}
