//! Módulo de base de datos
//!
//! Maneja el pool de PostgreSQL, las sesiones por unidad de trabajo y el schema.

pub mod connection;
pub mod isolated;
pub mod schema;

pub use connection::{Database, Session, UnitOfWork};
pub use isolated::IsolatedDatabase;
