use crate::utils::error::{AppError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Deposit and withdrawal amounts must be strictly positive. NaN is rejected too.
pub fn validate_positive_amount(amount: f64) -> Result<()> {
    if amount > 0.0 {
        Ok(())
    } else {
        Err(AppError::NonPositiveAmount { amount })
    }
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if value >= 0.0 && value.is_finite() {
        return Ok(());
    }
    Err(AppError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: "Value must be a finite number of at least 0".to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if !(value >= min && value <= max) {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Rejects the first value that appears twice.
pub fn validate_unique<'a, T, I>(field_name: &str, values: I) -> Result<()>
where
    T: std::hash::Hash + Eq + std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(AppError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate value".to_string(),
            });
        }
    }
    Ok(())
}
