//! Utilidades de validación
//!
//! Este módulo contiene los validadores usados por los payloads de inserción
//! (`validator::Validate`).

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// CEP brasileño: ocho dígitos sin guion
    pub static ref ZIPCODE_REGEX: Regex = Regex::new(r"^\d{8}$").unwrap();
    /// Sigla de estado: dos letras mayúsculas
    pub static ref STATE_REGEX: Regex = Regex::new(r"^[A-Z]{2}$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un precio no sea negativo
pub fn validate_non_negative_price(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
