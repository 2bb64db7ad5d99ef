use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum PushServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("{0}")]
    Invalid(String),
    #[error("subscription not found")]
    NotFound,
    #[error("Web Push is not configured")]
    Unavailable,
}

impl From<AppError> for PushServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => PushServiceError::Invalid(msg),
            AppError::NotFound(_) => PushServiceError::NotFound,
            AppError::ServiceUnavailable(_) => PushServiceError::Unavailable,
            _ => PushServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<PushServiceError> for AppError {
    fn from(err: PushServiceError) -> Self {
        match err {
            PushServiceError::Invalid(msg) => AppError::BadRequest(msg),
            PushServiceError::NotFound => AppError::NotFound("Subscription not found".to_string()),
            PushServiceError::Unavailable => {
                AppError::ServiceUnavailable("Web Push is not configured".to_string())
            }
            PushServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
