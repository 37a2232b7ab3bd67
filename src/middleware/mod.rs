//! Middleware del sistema
//!
//! Este módulo contiene el extractor de autenticación, la exigencia del header
//! de fingerprint y la configuración de CORS.

pub mod auth;
pub mod cors;
pub mod fingerprint;

pub use auth::*;
pub use cors::*;
pub use fingerprint::*;
