//! Services module
//!
//! Este módulo contiene la lógica de negocio: autenticación, emisión de
//! tokens, hash de contraseñas y alta de clientes.

pub mod auth_service;
pub mod jwt_service;
pub mod password_service;
pub mod user_service;

pub use auth_service::{AuthService, UserLookup};
pub use jwt_service::{JwtConfig, JwtService};
pub use password_service::PasswordHasher;
pub use user_service::UserService;
