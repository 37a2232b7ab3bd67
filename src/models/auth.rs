use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{User, UserRole};

/// Claims del JWT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub user_id: i32,
    pub username: String,
    pub user_role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Información del usuario autenticado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
    pub role: UserRole,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Token emitido por el signin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserInfo,
}

impl AuthToken {
    pub fn bearer(token: String, expires_at: DateTime<Utc>, user: UserInfo) -> Self {
        Self {
            token,
            token_type: "bearer".to_string(),
            expires_at,
            user,
        }
    }
}
