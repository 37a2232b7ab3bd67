use async_trait::async_trait;
use chrono::Duration;
use sqlx::PgConnection;

use crate::config::environment::EnvironmentConfig;
use crate::database::Session;
use crate::models::auth::{AuthToken, JwtClaims, UserInfo};
use crate::models::user::User;
use crate::repositories::UserRepository;
use crate::services::jwt_service::{JwtConfig, JwtService};
use crate::services::password_service::PasswordHasher;
use crate::utils::errors::{AppError, AppResult};

/// Búsqueda de usuarios por username
#[async_trait]
pub trait UserLookup: Send {
    async fn find_user_by_username(&mut self, username: &str) -> AppResult<Option<User>>;
}

#[async_trait]
impl UserLookup for PgConnection {
    async fn find_user_by_username(&mut self, username: &str) -> AppResult<Option<User>> {
        UserRepository::new(self).find_by_username(username).await
    }
}

#[async_trait]
impl UserLookup for Session {
    async fn find_user_by_username(&mut self, username: &str) -> AppResult<Option<User>> {
        UserRepository::new(self).find_by_username(username).await
    }
}

/// Servicio de autenticación
#[derive(Clone)]
pub struct AuthService {
    jwt_service: JwtService,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(jwt_service: JwtService, hasher: PasswordHasher) -> Self {
        Self {
            jwt_service,
            hasher,
        }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self::new(
            JwtService::new(JwtConfig::from(config)),
            PasswordHasher::new(config.password_hash_cost),
        )
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Autentica un usuario y emite su token
    pub async fn signin<L>(&self, username: &str, password: &str, lookup: &mut L) -> AppResult<AuthToken>
    where
        L: UserLookup + ?Sized,
    {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::MalformedCredentials(
                "username and password are required".to_string(),
            ));
        }

        let user = lookup
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))?;

        if !self.hasher.verify(password, &user.hashed_password).await? {
            tracing::warn!(user_id = user.id, "Signin rechazado: contraseña incorrecta");
            return Err(AppError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AppError::InactiveUser(format!("User '{}' is inactive", username)));
        }

        let (token, expires_at) = self.jwt_service.issue(&user)?;
        tracing::info!(user_id = user.id, role = user.role.as_str(), "✅ Signin exitoso");

        Ok(AuthToken::bearer(token, expires_at, UserInfo::from(&user)))
    }

    /// Emite un token con la misma forma pero ya vencido
    pub fn expired_token(&self, user: &User) -> AppResult<String> {
        self.token_with_validity(user, -self.jwt_service.validity())
    }

    pub fn token_with_validity(&self, user: &User, validity: Duration) -> AppResult<String> {
        let (token, _) = self.jwt_service.issue_with_validity(user, validity)?;
        Ok(token)
    }

    pub fn verify_token(&self, token: &str) -> AppResult<JwtClaims> {
        self.jwt_service.verify(token)
    }
}
