use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ArticleServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("article not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ArticleServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ArticleServiceError::Invalid(msg),
            AppError::NotFound(_) => ArticleServiceError::NotFound,
            _ => ArticleServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<ArticleServiceError> for AppError {
    fn from(err: ArticleServiceError) -> Self {
        match err {
            ArticleServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ArticleServiceError::NotFound => AppError::NotFound("Article not found".to_string()),
            ArticleServiceError::Dependency(msg) => AppError::Internal(msg),
            ArticleServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
