use axum::{
    extract::State,
    middleware::from_fn_with_state,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::AuthController;
use crate::dto::auth_dto::{MeResponse, SigninRequest, SigninResponse};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/signin", post(signin))
        .merge(protected)
}

async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, AppError> {
    let response = AuthController::new(state).signin(request).await?;
    Ok(Json(response))
}

async fn me(Extension(current): Extension<AuthenticatedUser>) -> Json<MeResponse> {
    Json(AuthController::me(current))
}
