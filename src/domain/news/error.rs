use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("unknown region: {0}")]
    UnknownRegion(String),
}

impl From<NewsError> for AppError {
    fn from(err: NewsError) -> Self {
        match err {
            NewsError::UnknownRegion(region) => {
                AppError::NotFound(format!("Unknown news region: {}", region))
            }
        }
    }
}
