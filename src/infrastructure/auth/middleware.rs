use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{domain::auth::AuthService, error::AppError};

pub const X_AUTH_TOKEN: &str = "x-auth-token";

/// Admin context injected into request extensions after authentication
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
}

/// Admin-only routes. Accepts `Authorization: Bearer <token>` or the legacy
/// `x-auth-token` header.
pub async fn admin_middleware(
    State(auth_service): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)
        .ok_or_else(|| AppError::Unauthorized("No token, authorization denied".to_string()))?;

    let user = auth_service.authenticate_admin(&token).await?;

    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}

fn extract_token(request: &Request) -> Option<String> {
    let headers = request.headers();

    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    let legacy = headers
        .get(X_AUTH_TOKEN)
        .and_then(|v| v.to_str().ok())
        .map(str::trim);

    bearer
        .or(legacy)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}
