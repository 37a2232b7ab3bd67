//! Modelos de Customer y Address
//!
//! Un Customer comparte el id de su User (relación 1–1) y puede
//! apuntar a una Address.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::{validate_not_empty, STATE_REGEX, ZIPCODE_REGEX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: i32,
    pub street: String,
    pub city: String,
    pub state: String,
    pub complement: String,
    pub zipcode: String,
}

/// Payload para insertar una dirección
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAddress {
    #[validate(custom = "validate_not_empty", length(max = 255))]
    pub street: String,

    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub city: String,

    #[validate(regex = "STATE_REGEX")]
    pub state: String,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub complement: String,

    #[validate(regex = "ZIPCODE_REGEX")]
    pub zipcode: String,
}

/// Customer - `id` es el mismo id del User
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub address_id: Option<i32>,
}

/// Datos para registrar un cliente completo (user + address + customer)
#[derive(Debug, Clone, Validate)]
pub struct NewCustomer {
    #[validate(email)]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,

    pub first_name: Option<String>,
    pub last_name: Option<String>,

    #[validate]
    pub address: Option<NewAddress>,
}

impl NewCustomer {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            first_name: None,
            last_name: None,
            address: None,
        }
    }

    pub fn with_names(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_address(mut self, address: NewAddress) -> Self {
        self.address = Some(address);
        self
    }
}
