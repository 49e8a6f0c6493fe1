use std::ops::RangeInclusive;

use crate::errors::{BoxingError, Result};
use crate::model::WeightClass;

/// Ages a boxer may be registered at
pub const AGE_RANGE: RangeInclusive<i64> = 18..=40;

/// Validate the fields of a boxer about to be created
///
/// Checks run in field order and the first failure is returned:
///
/// 1. name is not empty or whitespace-only
/// 2. weight is at least the featherweight minimum (125)
/// 3. height is positive
/// 4. reach is positive
/// 5. age is within 18..=40
///
/// # Errors
/// Returns `InvalidField` naming the first offending field.
pub fn validate_boxer_fields(
    name: &str,
    weight: f64,
    height: f64,
    reach: f64,
    age: i64,
) -> Result<()> {
    validate_name(name)?;
    validate_weight(weight)?;
    validate_positive("height", height)?;
    validate_positive("reach", reach)?;
    validate_age(age)
}

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid("name", "cannot be empty or whitespace-only"));
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < WeightClass::MIN_WEIGHT {
        return Err(invalid(
            "weight",
            format!("must be at least {}, got {}", WeightClass::MIN_WEIGHT, weight),
        ));
    }
    Ok(())
}

pub fn validate_positive(field: &str, value: f64) -> Result<()> {
    // NaN and infinities are rejected as well
    if !value.is_finite() || value <= 0.0 {
        return Err(invalid(field, format!("must be greater than 0, got {}", value)));
    }
    Ok(())
}

pub fn validate_age(age: i64) -> Result<()> {
    if !AGE_RANGE.contains(&age) {
        return Err(invalid(
            "age",
            format!(
                "must be between {} and {}, got {}",
                AGE_RANGE.start(),
                AGE_RANGE.end(),
                age
            ),
        ));
    }
    Ok(())
}

fn invalid(field: &str, reason: impl Into<String>) -> BoxingError {
    BoxingError::InvalidField {
        field: field.to_string(),
        reason: reason.into(),
    }
}
