use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Token is not valid")]
    InvalidToken,
    #[error("User not found")]
    UserNotFound,
    #[error("Admin access required")]
    NotAdmin,
}

impl From<AppError> for AuthServiceError {
    fn from(err: AppError) -> Self {
        AuthServiceError::Dependency(err.to_string())
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::MissingCredentials | AuthServiceError::InvalidCredentials => {
                AppError::BadRequest(err.to_string())
            }
            AuthServiceError::InvalidToken => AppError::Unauthorized(err.to_string()),
            AuthServiceError::UserNotFound => AppError::NotFound(err.to_string()),
            AuthServiceError::NotAdmin => AppError::Forbidden(err.to_string()),
            AuthServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
