use crate::domain::youtube::{LiveVideo, TrendingVideo, YouTubeApi, YouTubeError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: String,
    snippet: Snippet,
    statistics: Option<Statistics>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: String,
    published_at: Option<String>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
}

impl Thumbnails {
    fn best(self) -> Option<String> {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|thumbnail| thumbnail.url)
    }
}

/// YouTube Data API v3 over HTTPS, authenticated with an API key
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url: YOUTUBE_API_BASE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<T>, YouTubeError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, resource))
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| YouTubeError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(YouTubeError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| YouTubeError::Decode(e.to_string()))
    }
}

#[async_trait]
impl YouTubeApi for YouTubeClient {
    async fn live_video(&self, channel_id: &str) -> Result<Option<LiveVideo>, YouTubeError> {
        let response: ListResponse<SearchItem> = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("channelId", channel_id),
                    ("eventType", "live"),
                    ("type", "video"),
                    ("maxResults", "1"),
                ],
            )
            .await?;

        Ok(response.items.into_iter().find_map(|item| {
            item.id.video_id.map(|video_id| LiveVideo {
                video_id,
                title: item.snippet.title,
                thumbnail: item.snippet.thumbnails.best(),
            })
        }))
    }

    async fn trending(
        &self,
        region_code: &str,
        category_id: &str,
        max_results: u32,
    ) -> Result<Vec<TrendingVideo>, YouTubeError> {
        let max_results = max_results.to_string();
        let response: ListResponse<VideoItem> = self
            .get(
                "videos",
                &[
                    ("part", "snippet,statistics"),
                    ("chart", "mostPopular"),
                    ("regionCode", region_code),
                    ("videoCategoryId", category_id),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|item| TrendingVideo {
                id: item.id,
                title: item.snippet.title,
                description: item.snippet.description,
                channel_title: item.snippet.channel_title,
                published_at: item.snippet.published_at,
                thumbnail: item.snippet.thumbnails.best(),
                view_count: item.statistics.and_then(|s| s.view_count),
            })
            .collect())
    }
}
