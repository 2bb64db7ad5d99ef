use super::{extract_image, FeedItem, FeedSource};
use crate::domain::shared::text::{plain_text, read_time, truncate_chars};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const EXCERPT_CHARS: usize = 200;

/// Article built from a third party feed item. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RssArticle {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub image: String,
    pub read_time: String,
    pub author: String,
    pub source: String,
    pub external_link: Option<String>,
    pub date: DateTime<Utc>,
    pub content_type: String,
    pub status: String,
    pub featured: bool,
    /// Publication date as given by the feed; `date` falls back to the
    /// fetch time when this is missing
    #[serde(skip)]
    pub published: Option<DateTime<Utc>>,
}

impl RssArticle {
    pub fn from_item(
        item: FeedItem,
        source: &FeedSource,
        feed_title: Option<&str>,
        fetched_at: DateTime<Utc>,
    ) -> Self {
        let image = extract_image(&item);

        let id = [item.id.as_deref(), item.link.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|candidate| !candidate.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let title = Some(plain_text(&item.title))
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| "Untitled".to_string());

        let content = item
            .content_html
            .clone()
            .or_else(|| item.summary_html.clone())
            .unwrap_or_default();

        let excerpt_source = item.summary_html.as_deref().unwrap_or(&content);
        let excerpt = truncate_chars(&plain_text(excerpt_source), EXCERPT_CHARS);

        let author = feed_title
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(&source.name)
            .to_string();

        Self {
            id,
            title,
            excerpt,
            read_time: read_time(&content),
            content,
            category: source.category.clone(),
            image,
            author,
            source: "rss".to_string(),
            external_link: item.link,
            date: item.published.unwrap_or(fetched_at),
            content_type: "rss".to_string(),
            status: "published".to_string(),
            featured: false,
            published: item.published,
        }
    }
}
