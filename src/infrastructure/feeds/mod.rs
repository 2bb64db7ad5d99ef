pub mod parse;
pub mod raw;

use crate::domain::news::{FeedFetchError, FeedFetcher, FeedSource, ParsedFeed};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

pub use parse::parse_feed;

const USER_AGENT: &str = "Newsdesk/1.0 (RSS Aggregator)";
const FEED_ACCEPT: &str =
    "application/rss+xml, application/atom+xml, application/xml;q=0.9, text/xml;q=0.9, */*;q=0.8";

/// Fetches feeds over HTTP. The aggregator enforces the per-feed timeout;
/// the client timeout only bounds connections nobody waits for anymore.
pub struct HttpFeedFetcher {
    client: Client,
}

impl HttpFeedFetcher {
    pub fn new(request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, source: &FeedSource) -> Result<ParsedFeed, FeedFetchError> {
        let response = self
            .client
            .get(&source.url)
            .header(ACCEPT, FEED_ACCEPT)
            .send()
            .await
            .map_err(|e| FeedFetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedFetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FeedFetchError::Http(e.to_string()))?;

        parse_feed(&bytes)
    }
}
