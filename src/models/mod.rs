//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL del taller.

pub mod auth;
pub mod customer;
pub mod order;
pub mod service;
pub mod user;
pub mod vehicle;

pub use auth::{AuthToken, JwtClaims, UserInfo};
pub use customer::{Address, Customer, NewAddress, NewCustomer};
pub use order::{NewOrder, Order, OrderStatus};
pub use service::{NewService, Service};
pub use user::{NewUser, RoleRow, User, UserResponse, UserRole};
pub use vehicle::{CustomerVehicle, NewCustomerVehicle, NewVehicle, Vehicle};
