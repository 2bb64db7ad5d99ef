use crate::domain::user::UserProfile;
use serde::{Deserialize, Serialize};

/// Login form. Fields are optional so a missing one is reported as a
/// validation error instead of a body rejection.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
    pub user: UserProfile,
}
