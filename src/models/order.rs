//! Modelo de Order
//!
//! Los vehículos, servicios y empleados de una orden se guardan como listas
//! de ids (`INTEGER[]`), no como tablas de unión.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use validator::{Validate, ValidationError};

/// Estado de la orden - mapea al ENUM order_status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Type)]
#[sqlx(type_name = "order_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    UnderReview,
    Approved,
    InProgress,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::UnderReview,
        OrderStatus::Approved,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Canceled,
    ];

    /// Etiqueta tal como se guarda en la base de datos
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::UnderReview => "UNDER_REVIEW",
            OrderStatus::Approved => "APPROVED",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Canceled => "CANCELED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub customer_vehicle_ids: Vec<i32>,
    pub service_ids: Vec<i32>,
    pub employee_ids: Vec<i32>,
    pub start_date: DateTime<Utc>,
    /// Instante estimado de finalización
    pub estimated_time: DateTime<Utc>,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_order_window"))]
pub struct NewOrder {
    pub customer_id: i32,
    #[serde(default)]
    pub customer_vehicle_ids: Vec<i32>,
    #[serde(default)]
    pub service_ids: Vec<i32>,
    #[serde(default)]
    pub employee_ids: Vec<i32>,
    pub start_date: DateTime<Utc>,
    pub estimated_time: DateTime<Utc>,
    #[serde(default)]
    pub status: OrderStatus,
}

fn validate_order_window(order: &NewOrder) -> Result<(), ValidationError> {
    if order.estimated_time < order.start_date {
        return Err(ValidationError::new("estimated_time_before_start_date"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::UnderReview).unwrap(),
            "\"UNDER_REVIEW\""
        );
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert_eq!(OrderStatus::default(), OrderStatus::UnderReview);
    }

    #[test]
    fn test_order_window_validation() {
        let start_date = Utc::now() + Duration::days(2);
        let mut order = NewOrder {
            customer_id: 1,
            customer_vehicle_ids: vec![1],
            service_ids: vec![1],
            employee_ids: vec![],
            start_date,
            estimated_time: start_date + Duration::hours(1),
            status: OrderStatus::UnderReview,
        };
        assert!(order.validate().is_ok());

        order.estimated_time = start_date - Duration::hours(1);
        assert!(order.validate().is_err());
    }
}
