use super::{Comment, CreateCommentRequest};
use crate::error::AppError;
use crate::infrastructure::repositories::CommentRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

const ANONYMOUS: &str = "Anonymous";
const MAX_CONTENT_CHARS: usize = 2000;
const MAX_AUTHOR_CHARS: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum CommentServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("{0}")]
    Invalid(String),
    #[error("comment not found")]
    NotFound,
}

impl From<CommentServiceError> for AppError {
    fn from(err: CommentServiceError) -> Self {
        match err {
            CommentServiceError::Invalid(msg) => AppError::BadRequest(msg),
            CommentServiceError::NotFound => AppError::NotFound("Comment not found".to_string()),
            CommentServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}

pub struct CommentService {
    repository: Arc<CommentRepository>,
}

impl CommentService {
    pub fn new(repository: Arc<CommentRepository>) -> Self {
        Self { repository }
    }

    /// Comments newest first, optionally restricted to one article
    pub async fn list(&self, article_id: Option<&str>) -> Result<Vec<Comment>, CommentServiceError> {
        let mut comments = self
            .repository
            .list(article_id)
            .await
            .map_err(|e| CommentServiceError::Dependency(e.to_string()))?;
        comments.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(comments)
    }

    pub async fn create(
        &self,
        request: CreateCommentRequest,
    ) -> Result<Comment, CommentServiceError> {
        let article_id = request
            .article_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| CommentServiceError::Invalid("Article id is required".to_string()))?;

        let content = request.content.unwrap_or_default().trim().to_string();
        if content.is_empty() {
            return Err(CommentServiceError::Invalid(
                "Comment content is required".to_string(),
            ));
        }
        if content.chars().count() > MAX_CONTENT_CHARS {
            return Err(CommentServiceError::Invalid(format!(
                "Comment must be at most {} characters",
                MAX_CONTENT_CHARS
            )));
        }

        let author = request
            .author
            .map(|a| a.trim().chars().take(MAX_AUTHOR_CHARS).collect::<String>())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string());

        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            article_id,
            author,
            content,
            date: Utc::now(),
            likes: 0,
        };

        self.repository
            .insert(comment.clone())
            .await
            .map_err(|e| CommentServiceError::Dependency(e.to_string()))?;

        tracing::info!(comment_id = %comment.id, article_id = %comment.article_id, "Comment created");
        Ok(comment)
    }

    pub async fn like(&self, comment_id: &str) -> Result<Comment, CommentServiceError> {
        self.repository
            .like(comment_id)
            .await
            .map_err(|e| CommentServiceError::Dependency(e.to_string()))?
            .ok_or(CommentServiceError::NotFound)
    }
}
