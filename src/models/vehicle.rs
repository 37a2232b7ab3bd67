//! Modelo de Vehicle
//!
//! `Vehicle` describe el modelo físico; `CustomerVehicle` lo asigna a un
//! cliente con su placa.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub year: i32,
}

/// Payload para insertar un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewVehicle {
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub brand: String,

    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub model: String,

    #[validate(custom = "validate_not_empty", length(max = 50))]
    pub color: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,
}

/// Asignación de un vehículo a un cliente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CustomerVehicle {
    pub id: i32,
    pub customer_id: i32,
    pub vehicle_id: i32,
    pub plate_code: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCustomerVehicle {
    pub customer_id: i32,
    pub vehicle_id: i32,

    #[serde(default)]
    #[validate(length(max = 16))]
    pub plate_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_year_range() {
        let mut vehicle = NewVehicle {
            brand: "chevrolet".into(),
            model: "corsa".into(),
            color: "black".into(),
            year: 2007,
        };
        assert!(vehicle.validate().is_ok());

        vehicle.year = 1850;
        assert!(vehicle.validate().is_err());
    }

    #[test]
    fn test_plate_code_may_be_empty() {
        let link = NewCustomerVehicle {
            customer_id: 1,
            vehicle_id: 1,
            plate_code: String::new(),
        };
        assert!(link.validate().is_ok());
    }
}
