//! Client-side checks run before any create/update request.
//!
//! The backend stays authoritative; these only block obviously bad input
//! so the user gets an immediate message. Checks run in a fixed order and
//! the first failure wins.

use crate::credito::CreditoPayload;
use std::fmt;

/// Raw form input, exactly as read from the inputs.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct FormValues {
    pub cliente: String,
    pub monto: String,
    pub tasa_interes: String,
    pub plazo: String,
    pub fecha_otorgamiento: String,
}

/// The first invariant a form submission violates.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValidationError {
    ClienteRequired,
    InvalidMonto,
    InvalidTasa,
    InvalidPlazo,
    InvalidFecha,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::ClienteRequired => "El campo 'Cliente' es obligatorio.",
            ValidationError::InvalidMonto => "Monto inválido.",
            ValidationError::InvalidTasa => "Tasa inválida.",
            ValidationError::InvalidPlazo => "Plazo inválido.",
            ValidationError::InvalidFecha => "Fecha con formato YYYY-MM-DD.",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

/// Parse a decimal that must be present, finite and non-negative.
fn parse_non_negative(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}

/// Parse a positive integer. Integral decimals such as `12.0` are accepted.
fn parse_positive_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return (value > 0).then_some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value > 0.0 && value <= i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// True when `s` has the shape `DDDD-DD-DD` (ASCII digits).
///
/// Only the shape is checked; calendar validity is left to the backend.
pub fn is_date_pattern(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Validate raw form input and build the request payload.
///
/// Order: cliente, monto, tasa_interes, plazo, fecha_otorgamiento.
pub fn validate(values: &FormValues) -> Result<CreditoPayload, ValidationError> {
    let cliente = values.cliente.trim();
    if cliente.is_empty() {
        return Err(ValidationError::ClienteRequired);
    }
    let monto = parse_non_negative(&values.monto).ok_or(ValidationError::InvalidMonto)?;
    let tasa_interes =
        parse_non_negative(&values.tasa_interes).ok_or(ValidationError::InvalidTasa)?;
    let plazo = parse_positive_integer(&values.plazo).ok_or(ValidationError::InvalidPlazo)?;
    if !is_date_pattern(&values.fecha_otorgamiento) {
        return Err(ValidationError::InvalidFecha);
    }

    Ok(CreditoPayload {
        cliente: cliente.to_string(),
        monto,
        tasa_interes,
        plazo,
        fecha_otorgamiento: values.fecha_otorgamiento.clone(),
    })
}
