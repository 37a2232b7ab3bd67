//! Repositorios
//!
//! Cada repositorio toma prestada la conexión de una `Session` (o de un
//! `UnitOfWork`) y devuelve las filas ya guardadas con sus ids generados.

pub mod customer_repository;
pub mod order_repository;
pub mod service_repository;
pub mod user_repository;
pub mod vehicle_repository;

pub use customer_repository::{AddressRepository, CustomerRepository};
pub use order_repository::OrderRepository;
pub use service_repository::ServiceRepository;
pub use user_repository::{RoleRepository, UserRepository};
pub use vehicle_repository::VehicleRepository;
