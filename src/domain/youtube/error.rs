use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum YouTubeError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("YouTube API returned status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum YouTubeServiceError {
    #[error("YouTube API key not configured")]
    NotConfigured,
    #[error(transparent)]
    Upstream(#[from] YouTubeError),
}

impl From<YouTubeServiceError> for AppError {
    fn from(err: YouTubeServiceError) -> Self {
        match err {
            YouTubeServiceError::NotConfigured => AppError::ServiceUnavailable(err.to_string()),
            YouTubeServiceError::Upstream(e) => {
                AppError::ExternalService(format!("Failed to fetch YouTube videos: {}", e))
            }
        }
    }
}
