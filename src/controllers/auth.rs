use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    controllers::extract::ApiJson,
    domain::auth::{AuthService, LoginRequest, LoginResponse},
    domain::user::UserProfile,
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// POST /api/auth/login - Exchange credentials for a token
    pub async fn login(
        State(controller): State<Arc<AuthController>>,
        ApiJson(request): ApiJson<LoginRequest>,
    ) -> AppResult<Json<LoginResponse>> {
        let response = controller.auth_service.login(request).await?;
        Ok(Json(response))
    }

    /// GET /api/auth/me - Profile of the authenticated admin
    pub async fn me(
        State(controller): State<Arc<AuthController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<UserProfile>> {
        let profile = controller.auth_service.profile(auth_user.user_id).await?;
        Ok(Json(profile))
    }
}
