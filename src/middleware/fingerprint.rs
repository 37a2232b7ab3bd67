//! Middleware de fingerprint del cliente
//!
//! Toda request a la API debe identificar el dispositivo con
//! `X-User-Fingerprint`.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::utils::errors::AppError;

pub const FINGERPRINT_HEADER: &str = "x-user-fingerprint";

pub async fn require_fingerprint(request: Request, next: Next) -> Result<Response, AppError> {
    let present = request
        .headers()
        .get(FINGERPRINT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| !value.trim().is_empty())
        .unwrap_or(false);

    if !present {
        return Err(AppError::BadRequest(
            "X-User-Fingerprint header is required".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
