//! API del taller mecánico
//!
//! Usuarios con roles, clientes, vehículos, servicios y órdenes sobre
//! PostgreSQL, con autenticación JWT.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
pub use utils::errors::{AppError, AppResult};
