use validator::Validate;

use crate::dto::auth_dto::{ApiResponse, MeResponse, SigninRequest, SigninResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::user::UserResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct AuthController {
    state: AppState,
}

impl AuthController {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn signin(&self, request: SigninRequest) -> Result<SigninResponse, AppError> {
        // Credenciales vacías tienen su propio error, antes del formato
        if request.username.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::MalformedCredentials(
                "Username and password are required".to_string(),
            ));
        }
        request.validate()?;

        let mut session = self.state.db.session().await?;
        let token = self
            .state
            .auth
            .signin(&request.username, &request.password, &mut session)
            .await?;

        log::info!("🔐 Signin de {} ({})", token.user.username, token.user.role.as_str());
        Ok(SigninResponse::from(token))
    }

    pub fn me(current: AuthenticatedUser) -> MeResponse {
        ApiResponse::success(UserResponse::from(current.user))
    }
}
