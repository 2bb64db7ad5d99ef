use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_AUTHOR: &str = "Admin";
pub const DEFAULT_SOURCE: &str = "admin";
pub const DEFAULT_CONTENT_TYPE: &str = "article";
pub const STATUS_PUBLISHED: &str = "published";

/// Admin-authored article as stored in Postgres
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub read_time: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub date: DateTime<Utc>,
    pub featured: bool,
    pub content_type: String,
    pub status: String,
}

impl Article {
    pub fn is_published(&self) -> bool {
        self.status == STATUS_PUBLISHED
    }
}

/// Fully resolved values for an insert; defaults are applied by the service
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub read_time: String,
    pub author: String,
    pub source: String,
    pub date: DateTime<Utc>,
    pub featured: bool,
    pub content_type: String,
    pub status: String,
}

/// Filters accepted by `GET /api/articles`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleQuery {
    /// Exact category, ignoring case
    pub category: Option<String>,
    /// Category containing this text, ignoring case. Set by the RSS output.
    #[serde(skip)]
    pub category_contains: Option<String>,
    pub status: Option<String>,
    pub limit: Option<i64>,
}

/// Request to create an article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub read_time: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
    pub content_type: Option<String>,
    pub status: Option<String>,
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub read_time: Option<String>,
    pub author: Option<String>,
    pub source: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
    pub content_type: Option<String>,
    pub status: Option<String>,
}

impl UpdateArticleRequest {
    /// Merge this request into a stored article. A new body without an
    /// explicit read time recomputes it.
    pub fn apply_to(self, mut article: Article) -> Article {
        if let Some(content) = self.content {
            if self.read_time.is_none() {
                article.read_time = Some(crate::domain::shared::text::read_time(&content));
            }
            article.content = Some(content);
        }
        if let Some(title) = self.title {
            article.title = title;
        }
        if let Some(excerpt) = self.excerpt {
            article.excerpt = Some(excerpt);
        }
        if let Some(category) = self.category {
            article.category = Some(category);
        }
        if let Some(image) = self.image {
            article.image = Some(image);
        }
        if let Some(read_time) = self.read_time {
            article.read_time = Some(read_time);
        }
        if let Some(author) = self.author {
            article.author = Some(author);
        }
        if let Some(source) = self.source {
            article.source = Some(source);
        }
        if let Some(date) = self.date {
            article.date = date;
        }
        if let Some(featured) = self.featured {
            article.featured = featured;
        }
        if let Some(content_type) = self.content_type {
            article.content_type = content_type;
        }
        if let Some(status) = self.status {
            article.status = status;
        }
        article
    }
}
