//! Router HTTP de la API

pub mod auth_routes;

use axum::{extract::State, middleware::from_fn, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors::cors_middleware, fingerprint::require_fingerprint};
use crate::state::AppState;

/// Construye el router completo
///
/// `/health` queda fuera del control de fingerprint; el resto de rutas lo exige.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", auth_routes::create_auth_router(state.clone()))
        .route_layer(from_fn(require_fingerprint));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "environment": state.config.environment,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
