use crate::utils::error::{BookingError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects negative amounts, NaN and infinities.
pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(BookingError::invalid_argument(
            field_name,
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(BookingError::invalid_argument(
            field_name,
            format!("Value cannot be negative (got {})", value),
        ));
    }
    Ok(())
}

pub fn validate_at_least(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BookingError::invalid_argument(
            field_name,
            format!("Value {} cannot be less than {}", value, min_value),
        ));
    }
    Ok(())
}

pub fn validate_at_most(field_name: &str, value: usize, max_value: usize) -> Result<()> {
    if value > max_value {
        return Err(BookingError::invalid_argument(
            field_name,
            format!("Value {} cannot exceed {}", value, max_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookingError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| BookingError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Missing required value".to_string(),
        })
}

pub fn validate_unique_keys<'a, I>(field_name: &str, keys: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(BookingError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("Duplicate entry '{}'", key),
            });
        }
    }
    Ok(())
}
