use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::auth::AuthToken;
use crate::models::user::UserResponse;

// Request de signin
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email)]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

// Response de signin
#[derive(Debug, Serialize, Deserialize)]
pub struct SigninResponse {
    pub token: String,
    pub token_type: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub user_id: i32,
    pub username: String,
    pub role: crate::models::user::UserRole,
}

impl From<AuthToken> for SigninResponse {
    fn from(auth: AuthToken) -> Self {
        Self {
            token: auth.token,
            token_type: auth.token_type,
            expires_at: auth.expires_at,
            user_id: auth.user.id,
            username: auth.user.username,
            role: auth.user.role,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }
}

// Usuario actual (GET /auth/me)
pub type MeResponse = ApiResponse<UserResponse>;
