use crate::error::AppError;

/// Failure reported by a delivery backend
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("failed to obtain access token: {0}")]
    Auth(String),
    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Delivery(#[from] NotificationError),
}

impl From<NotificationServiceError> for AppError {
    fn from(err: NotificationServiceError) -> Self {
        match err {
            NotificationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            NotificationServiceError::Delivery(e) => {
                AppError::ExternalService(format!("Failed to send notification: {}", e))
            }
        }
    }
}
