pub mod dto;
pub mod error;
pub mod jwt;
pub mod service;

pub use dto::{LoginRequest, LoginResponse};
pub use error::AuthServiceError;
pub use jwt::{Claims, JwtManager};
pub use service::{AuthService, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
