//! Modelo de User
//!
//! Este módulo contiene el struct User, el enum cerrado de roles y
//! el payload de inserción.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

/// Rol del usuario - mapea a `user_roles.id` (SMALLINT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin = 1,
    Customer = 2,
    Employee = 3,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Customer, UserRole::Employee];

    pub fn id(self) -> i16 {
        self as i16
    }

    #[cfg(test)]
    pub fn from_id(id: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.id() == id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Customer => "customer",
            UserRole::Employee => "employee",
        }
    }
}

/// Fila de la tabla `user_roles`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleRow {
    pub id: i16,
    pub role: String,
}

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

/// Payload para insertar un usuario; la contraseña ya viene hasheada
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(email, length(max = 255))]
    pub username: String,

    #[validate(custom = "validate_not_empty")]
    pub hashed_password: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    pub role: UserRole,
    pub is_active: bool,
}

impl NewUser {
    pub fn new(username: impl Into<String>, hashed_password: impl Into<String>, role: UserRole) -> Self {
        Self {
            username: username.into(),
            hashed_password: hashed_password.into(),
            first_name: None,
            last_name: None,
            role,
            is_active: true,
        }
    }

    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }
}

/// Response de usuario para la API (sin password)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            is_active: user.is_active,
        }
    }
}
