//! Syntactic checks for user-entered resource quantities.

use thiserror::Error;

use super::split::{SplitQuantity, split_value_and_unit};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("white space is not allowed")]
    WhiteSpace,

    #[error("must be a number")]
    NotANumber,

    #[error("must be positive")]
    Negative,

    #[error("number and unit required")]
    UnitRequired,

    #[error("unrecognized unit: {0}")]
    UnrecognizedUnit(String),
}

pub const CPU_UNITS: &[&str] = &["m", ""];
pub const MEMORY_UNITS: &[&str] = &["E", "P", "T", "G", "M", "k", "Pi", "Ti", "Gi", "Mi", "Ki"];
pub const TIME_UNITS: &[&str] = &["s", "m", "h", "d", "M", "y"];

/// The number part must be finite and not negative.
pub(crate) fn check_number(number: f64) -> Result<(), ValidationError> {
    if !number.is_finite() {
        Err(ValidationError::NotANumber)
    } else if number < 0.0 {
        Err(ValidationError::Negative)
    } else {
        Ok(())
    }
}

fn validate_quantity(
    value: Option<&str>,
    allowed: &[&str],
    unit_required: bool,
) -> Result<(), ValidationError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(()),
    };
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::WhiteSpace);
    }

    let SplitQuantity { number, unit } = split_value_and_unit(value);
    check_number(number)?;

    match unit {
        None if unit_required => Err(ValidationError::UnitRequired),
        None => Ok(()),
        Some(unit) if allowed.contains(&unit) => Ok(()),
        Some(unit) => Err(ValidationError::UnrecognizedUnit(unit.to_string())),
    }
}

/// Memory accepts a bare byte count or a decimal/binary suffix (`128Mi`).
pub fn validate_memory(value: Option<&str>) -> Result<(), ValidationError> {
    validate_quantity(value, MEMORY_UNITS, false)
}

/// CPU accepts whole or fractional cores, or millicores (`250m`).
pub fn validate_cpu(value: Option<&str>) -> Result<(), ValidationError> {
    validate_quantity(value, CPU_UNITS, false)
}

/// Durations always need a unit (`30s`, `2d`).
pub fn validate_time(value: Option<&str>) -> Result<(), ValidationError> {
    validate_quantity(value, TIME_UNITS, true)
}
