use super::{AuthServiceError, JwtManager, LoginRequest, LoginResponse};
use crate::domain::user::{User, UserProfile};
use crate::infrastructure::repositories::UserRepository;
use std::sync::Arc;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    jwt: JwtManager,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt: JwtManager, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            jwt,
            bcrypt_cost,
        }
    }

    /// Exchange credentials for an access token. Unknown users and wrong
    /// passwords are indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AuthServiceError> {
        let (username, password) = match (request.username, request.password) {
            (Some(u), Some(p)) if !u.trim().is_empty() && !p.is_empty() => (u, p),
            _ => return Err(AuthServiceError::MissingCredentials),
        };

        let user = self
            .user_repo
            .find_by_username(username.trim())
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(password, user.password_hash.clone()).await? {
            tracing::debug!(username = %user.username, "Rejected login attempt");
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.jwt.generate_token(&user)?;
        tracing::info!(user_id = user.id, username = %user.username, "User logged in");

        Ok(LoginResponse {
            token,
            expires_in: self.jwt.expires_in_secs(),
            user: user.into(),
        })
    }

    /// Resolve a bearer token to an admin account
    pub async fn authenticate_admin(&self, token: &str) -> Result<User, AuthServiceError> {
        let claims = self
            .jwt
            .validate_token(token)
            .map_err(|_| AuthServiceError::InvalidToken)?;
        let user_id = claims.user_id().ok_or(AuthServiceError::InvalidToken)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)?;

        if !user.is_admin {
            return Err(AuthServiceError::NotAdmin);
        }
        Ok(user)
    }

    pub async fn profile(&self, user_id: i32) -> Result<UserProfile, AuthServiceError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(UserProfile::from)
            .ok_or(AuthServiceError::UserNotFound)
    }

    /// Seed the default admin account on an empty users table.
    /// Returns true when an account was created.
    pub async fn ensure_default_admin(&self) -> Result<bool, AuthServiceError> {
        if self.user_repo.count().await? > 0 {
            return Ok(false);
        }

        let hash = hash_password(DEFAULT_ADMIN_PASSWORD.to_string(), self.bcrypt_cost).await?;
        let user = self
            .user_repo
            .create(DEFAULT_ADMIN_USERNAME, &hash, true)
            .await?;

        tracing::warn!(
            user_id = user.id,
            username = %user.username,
            "Created default admin account, change its password"
        );
        Ok(true)
    }
}

// bcrypt is CPU bound, run it on the blocking pool
async fn hash_password(password: String, cost: u32) -> Result<String, AuthServiceError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))?
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))
}

async fn verify_password(password: String, hash: String) -> Result<bool, AuthServiceError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))?
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))
}
