//! Configuración de variables de entorno
//!
//! Este módulo construye la configuración del sistema una sola vez al arrancar.
//! Los servicios reciben el struct ya construido; nunca leen el entorno directamente.

use std::{collections::HashMap, env, str::FromStr};

use jsonwebtoken::Algorithm;

use crate::models::user::UserRole;
use crate::utils::errors::{config_error, AppError, AppResult};

/// Ventana máxima de un token, en días
pub const MAX_JWT_EXPIRATION_DAYS: i64 = 36_500;

/// Nombres de los roles, consumidos posicionalmente desde `ROLES`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleNames {
    pub admin: String,
    pub customer: String,
    pub employee: String,
}

impl RoleNames {
    /// Parsear la lista `admin,customer,employee`
    pub fn parse(value: &str) -> AppResult<Self> {
        let names: Vec<String> = value
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let roles = match names.as_slice() {
            [admin, customer, employee] => Self {
                admin: admin.clone(),
                customer: customer.clone(),
                employee: employee.clone(),
            },
            _ => {
                return Err(config_error(
                    "ROLES",
                    "expected exactly three comma separated names (admin, customer, employee)",
                ))
            }
        };

        if roles.admin == roles.customer
            || roles.admin == roles.employee
            || roles.customer == roles.employee
        {
            return Err(config_error("ROLES", "role names must be distinct"));
        }

        Ok(roles)
    }

    pub fn name_of(&self, role: UserRole) -> &str {
        match role {
            UserRole::Admin => &self.admin,
            UserRole::Customer => &self.customer,
            UserRole::Employee => &self.employee,
        }
    }

    #[cfg(test)]
    pub fn role_named(&self, name: &str) -> Option<UserRole> {
        UserRole::ALL
            .into_iter()
            .find(|role| self.name_of(*role) == name)
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub database_url: String,
    pub test_database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub jwt_expiration_days: i64,
    pub roles: RoleNames,
    pub password_hash_cost: u32,
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construir la configuración desde un mapa (tests, herramientas)
    pub fn from_map(values: &HashMap<String, String>) -> AppResult<Self> {
        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// Construir la configuración con una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> AppResult<String> {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| config_error(key, "must be set"))
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| config_error("PORT", "must be a valid port number"))?,
            None => 3000,
        };

        let jwt_algorithm = parse_algorithm(&required("JWT_ALGORITHM")?)?;

        let jwt_expiration_days: i64 = required("JWT_EXPIRATION_DAYS")?
            .trim()
            .parse()
            .map_err(|_| config_error("JWT_EXPIRATION_DAYS", "must be a valid number"))?;
        if jwt_expiration_days <= 0 {
            return Err(config_error("JWT_EXPIRATION_DAYS", "must be positive"));
        }
        if jwt_expiration_days > MAX_JWT_EXPIRATION_DAYS {
            return Err(config_error("JWT_EXPIRATION_DAYS", "out of range"));
        }

        let password_hash_cost = match lookup("PASSWORD_HASH_COST") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| config_error("PASSWORD_HASH_COST", "must be a valid number"))?,
            None => bcrypt::DEFAULT_COST,
        };
        if !(4..=31).contains(&password_hash_cost) {
            return Err(config_error("PASSWORD_HASH_COST", "must be between 4 and 31"));
        }

        Ok(Self {
            environment: lookup("ENV").unwrap_or_else(|| "production".to_string()),
            port,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            database_url: required("DATABASE_URL")?,
            test_database_url: lookup("TEST_DATABASE_URL").filter(|v| !v.trim().is_empty()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_algorithm,
            jwt_expiration_days,
            roles: RoleNames::parse(&required("ROLES")?)?,
            password_hash_cost,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Nivel de logs de la aplicación
    pub fn log_level(&self) -> tracing::Level {
        if self.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Nivel con el que sqlx registra cada sentencia SQL
    pub fn sql_log_level(&self) -> log::LevelFilter {
        if self.is_development() {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Solo se aceptan algoritmos HMAC: el secreto es una clave simétrica
fn parse_algorithm(value: &str) -> AppResult<Algorithm> {
    let algorithm = Algorithm::from_str(value.trim())
        .map_err(|_| config_error("JWT_ALGORITHM", "unknown algorithm"))?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        _ => Err(AppError::Configuration(format!(
            "JWT_ALGORITHM: {:?} requires a key pair, only HS256/HS384/HS512 are supported",
            algorithm
        ))),
    }
}
