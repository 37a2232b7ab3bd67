//! Modelo de Service (servicio del taller)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::{validate_non_negative_price, validate_not_empty};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: Option<String>,
    /// Duración estimada en segundos
    pub estimated_time: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewService {
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub name: String,

    #[validate(custom = "validate_non_negative_price")]
    pub price: Decimal,

    pub description: String,

    #[validate(url)]
    pub image: Option<String>,

    #[validate(range(min = 0))]
    pub estimated_time: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn oil_change() -> NewService {
        NewService {
            name: "Oil change".into(),
            price: Decimal::from_str("80.00").unwrap(),
            description: "Drain motor oil and replace it".into(),
            image: Some("https://images.wisegeek.com/oil-change.jpg".into()),
            estimated_time: 3600,
        }
    }

    #[test]
    fn test_service_validation() {
        assert!(oil_change().validate().is_ok());

        let mut free = oil_change();
        free.price = Decimal::ZERO;
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut service = oil_change();
        service.price = Decimal::from_str("-1.50").unwrap();

        let errors = service.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }
}
