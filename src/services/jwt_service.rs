use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::config::environment::{EnvironmentConfig, MAX_JWT_EXPIRATION_DAYS};
use crate::models::auth::JwtClaims;
use crate::models::user::User;
use crate::utils::errors::{AppError, AppResult};

/// Configuración JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub validity: Duration,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            algorithm: config.jwt_algorithm,
            validity: Duration::days(config.jwt_expiration_days.clamp(1, MAX_JWT_EXPIRATION_DAYS)),
        }
    }
}

/// Servicio JWT
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    pub fn validity(&self) -> Duration {
        self.config.validity
    }

    /// Genera un token con la ventana configurada
    pub fn issue(&self, user: &User) -> AppResult<(String, DateTime<Utc>)> {
        self.issue_with_validity(user, self.config.validity)
    }

    /// Genera un token con una ventana arbitraria; negativa produce un token ya vencido
    pub fn issue_with_validity(
        &self,
        user: &User,
        validity: Duration,
    ) -> AppResult<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(validity)
            .ok_or_else(|| AppError::Jwt("Token expiration is out of range".to_string()))?;

        let claims = JwtClaims {
            user_id: user.id,
            username: user.username.clone(),
            user_role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = self.encode_claims(&claims)?;
        tracing::debug!(user_id = user.id, %expires_at, "Token emitido");
        Ok((token, expires_at))
    }

    pub fn encode_claims(&self, claims: &JwtClaims) -> AppResult<String> {
        encode(&Header::new(self.config.algorithm), claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))
    }

    /// Valida firma y expiración y devuelve los claims
    pub fn verify(&self, token: &str) -> AppResult<JwtClaims> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::ExpiredToken,
                _ => AppError::InvalidToken(e.to_string()),
            })
    }
}
