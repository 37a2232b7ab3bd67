//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para permitir
//! requests desde diferentes orígenes.

use http::{header, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

use super::fingerprint::FINGERPRINT_HEADER;

/// CORS abierto, con los headers que usa la API
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(FINGERPRINT_HEADER),
        ])
}
