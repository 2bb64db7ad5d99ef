use super::{FeedSource, ParsedFeed};
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum FeedFetchError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("parse failed: {0}")]
    Parse(String),
}

/// Retrieves and parses one remote feed
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    async fn fetch(&self, source: &FeedSource) -> Result<ParsedFeed, FeedFetchError>;
}
