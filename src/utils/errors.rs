//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// SQLSTATE de PostgreSQL que reclasificamos
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Malformed credentials: {0}")]
    MalformedCredentials(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Inactive user: {0}")]
    InactiveUser(String),

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Código estable para clientes y tests
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DB_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::MalformedCredentials(_) => "MALFORMED_CREDENTIALS",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::InactiveUser(_) => "INACTIVE_USER",
            AppError::ExpiredToken => "EXPIRED_TOKEN",
            AppError::InvalidToken(_) => "INVALID_TOKEN",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Conflict(_) => "CONFLICT",
            AppError::ForeignKeyViolation(_) => "FOREIGN_KEY_VIOLATION",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Hash(_) => "HASH_ERROR",
            AppError::Jwt(_) => "JWT_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::MalformedCredentials(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials
            | AppError::ExpiredToken
            | AppError::InvalidToken(_)
            | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InactiveUser(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ForeignKeyViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_)
            | AppError::Configuration(_)
            | AppError::Hash(_)
            | AppError::Jwt(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, details) = match &self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    "An error occurred while accessing the database".to_string(),
                    None,
                )
            }
            AppError::Validation(e) => (
                "The provided data is invalid".to_string(),
                Some(json!(e)),
            ),
            AppError::Configuration(msg) | AppError::Hash(msg) | AppError::Jwt(msg) | AppError::Internal(msg) => {
                tracing::error!("{}: {}", code, msg);
                ("An unexpected error occurred".to_string(), None)
            }
            other => {
                tracing::warn!("{}", other);
                (other.to_string(), None)
            }
        };

        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message,
            details,
            code,
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Clasifica un error de sqlx según el SQLSTATE devuelto por PostgreSQL
pub fn map_db_error(error: sqlx::Error, context: &str) -> AppError {
    let code = error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned());

    match code.as_deref() {
        Some(UNIQUE_VIOLATION) => AppError::Conflict(format!("{}: {}", context, error)),
        Some(FOREIGN_KEY_VIOLATION) => {
            AppError::ForeignKeyViolation(format!("{}: {}", context, error))
        }
        Some(CHECK_VIOLATION) => AppError::BadRequest(format!("{}: {}", context, error)),
        _ => AppError::Database(error),
    }
}

/// Función helper para crear errores de configuración
pub fn config_error(key: &str, reason: &str) -> AppError {
    AppError::Configuration(format!("{}: {}", key, reason))
}
