//! Middleware de autenticación JWT
//!
//! Este módulo maneja la extracción del token Bearer, su verificación y la
//! recarga del usuario autenticado desde la base de datos.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{
    models::{auth::JwtClaims, user::User},
    repositories::UserRepository,
    state::AppState,
    utils::errors::{AppError, AppResult},
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub claims: JwtClaims,
}

/// Extraer token del header Authorization
pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("Authorization header required".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Authorization header is not valid text".to_string()))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Authorization header must start with 'Bearer '".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(AppError::Unauthorized("Token cannot be empty".to_string()));
    }

    Ok(token)
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = state.auth.verify_token(bearer_token(request.headers())?)?;

    // Sesión propia de la request, liberada al salir del bloque
    let user = {
        let mut session = state.db.session().await?;
        UserRepository::new(&mut session)
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("User no longer exists".to_string()))?
    };

    if !user.is_active {
        return Err(AppError::InactiveUser(format!("User '{}' is inactive", user.username)));
    }

    // Inyectar usuario autenticado en las extensions
    request.extensions_mut().insert(AuthenticatedUser { user, claims });

    Ok(next.run(request).await)
}
