use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reader comment. `article_id` may point at a stored article or at an
/// RSS-derived id, so it is kept as an opaque string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(alias = "article_id")]
    pub article_id: String,
    pub author: String,
    pub content: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub likes: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentQuery {
    #[serde(alias = "article_id")]
    pub article_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(alias = "article_id")]
    pub article_id: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
}
