use super::model::{DEFAULT_AUTHOR, DEFAULT_CONTENT_TYPE, DEFAULT_SOURCE, STATUS_PUBLISHED};
use super::{
    Article, ArticleQuery, ArticleServiceError, CreateArticleRequest, NewArticle,
    UpdateArticleRequest,
};
use crate::domain::shared::text::{plain_text, read_time, truncate_chars};
use crate::infrastructure::repositories::ArticleRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

const EXCERPT_CHARS: usize = 200;

pub struct ArticleService {
    repository: Arc<dyn ArticleRepository>,
}

impl ArticleService {
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
pub trait ArticleServiceApi: Send + Sync {
    async fn list(&self, query: ArticleQuery) -> Result<Vec<Article>, ArticleServiceError>;

    async fn featured(&self) -> Result<Vec<Article>, ArticleServiceError>;

    async fn get(&self, id: i64) -> Result<Article, ArticleServiceError>;

    /// `author` is the authenticated admin, used when the request names none
    async fn create(
        &self,
        request: CreateArticleRequest,
        author: Option<&str>,
    ) -> Result<Article, ArticleServiceError>;

    async fn update(
        &self,
        id: i64,
        request: UpdateArticleRequest,
    ) -> Result<Article, ArticleServiceError>;

    async fn delete(&self, id: i64) -> Result<(), ArticleServiceError>;
}

#[async_trait]
impl ArticleServiceApi for ArticleService {
    async fn list(&self, query: ArticleQuery) -> Result<Vec<Article>, ArticleServiceError> {
        self.repository
            .list(&query)
            .await
            .map_err(|e| ArticleServiceError::Dependency(e.to_string()))
    }

    async fn featured(&self) -> Result<Vec<Article>, ArticleServiceError> {
        self.repository
            .find_featured()
            .await
            .map_err(|e| ArticleServiceError::Dependency(e.to_string()))
    }

    async fn get(&self, id: i64) -> Result<Article, ArticleServiceError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| ArticleServiceError::Dependency(e.to_string()))?
            .ok_or(ArticleServiceError::NotFound)
    }

    async fn create(
        &self,
        request: CreateArticleRequest,
        author: Option<&str>,
    ) -> Result<Article, ArticleServiceError> {
        let title = validate_title(request.title.as_deref())?;
        let content = non_empty(request.content);

        let excerpt = non_empty(request.excerpt).or_else(|| {
            content
                .as_deref()
                .map(|html| truncate_chars(&plain_text(html), EXCERPT_CHARS))
                .filter(|excerpt| !excerpt.is_empty())
        });

        let new_article = NewArticle {
            title,
            excerpt,
            read_time: non_empty(request.read_time)
                .unwrap_or_else(|| read_time(content.as_deref().unwrap_or_default())),
            content,
            category: non_empty(request.category),
            image: non_empty(request.image),
            author: non_empty(request.author)
                .or_else(|| author.map(str::to_string))
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            source: non_empty(request.source).unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            date: request.date.unwrap_or_else(Utc::now),
            featured: request.featured.unwrap_or(false),
            content_type: non_empty(request.content_type)
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            status: non_empty(request.status).unwrap_or_else(|| STATUS_PUBLISHED.to_string()),
        };

        let article = self
            .repository
            .create(new_article)
            .await
            .map_err(|e| ArticleServiceError::Dependency(e.to_string()))?;

        tracing::info!(article_id = article.id, title = %article.title, "Article created");
        Ok(article)
    }

    async fn update(
        &self,
        id: i64,
        request: UpdateArticleRequest,
    ) -> Result<Article, ArticleServiceError> {
        if request.title.is_some() {
            validate_title(request.title.as_deref())?;
        }

        let current = self.get(id).await?;
        let merged = request.apply_to(current);

        let article = self
            .repository
            .update(&merged)
            .await
            .map_err(|e| ArticleServiceError::Dependency(e.to_string()))?
            .ok_or(ArticleServiceError::NotFound)?;

        tracing::info!(article_id = article.id, "Article updated");
        Ok(article)
    }

    async fn delete(&self, id: i64) -> Result<(), ArticleServiceError> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(|e| ArticleServiceError::Dependency(e.to_string()))?;

        if !deleted {
            return Err(ArticleServiceError::NotFound);
        }

        tracing::info!(article_id = id, "Article deleted");
        Ok(())
    }
}

fn validate_title(title: Option<&str>) -> Result<String, ArticleServiceError> {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(ArticleServiceError::Invalid("Title is required".to_string())),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
