//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. En tests se construye sobre una base aislada.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::database::Database;
use crate::services::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<EnvironmentConfig>,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(db: Database, config: EnvironmentConfig) -> Self {
        let auth = AuthService::from_config(&config);

        Self {
            db,
            config: Arc::new(config),
            auth,
        }
    }
}
