use chrono::{DateTime, Utc};

/// One entry of a parsed feed, normalized across RSS, Atom and JSON Feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedItem {
    /// `<guid>` or Atom `<id>`
    pub id: Option<String>,
    pub title: String,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub content_html: Option<String>,
    pub summary_html: Option<String>,
    pub media: Vec<MediaRef>,
}

/// Where a feed advertised an image for an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaRef {
    /// `media:thumbnail`
    Thumbnail(String),
    /// `media:content`
    Content { url: String, mime: Option<String> },
    /// RSS `<enclosure>`
    Enclosure { url: String, mime: Option<String> },
    /// Non standard elements such as `<image>` or `<featuredImage>`
    Field { name: String, url: String },
}

impl MediaRef {
    pub fn url(&self) -> &str {
        match self {
            MediaRef::Thumbnail(url) => url,
            MediaRef::Content { url, .. } => url,
            MediaRef::Enclosure { url, .. } => url,
            MediaRef::Field { url, .. } => url,
        }
    }
}

/// A fetched and parsed feed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFeed {
    pub title: Option<String>,
    pub items: Vec<FeedItem>,
}
