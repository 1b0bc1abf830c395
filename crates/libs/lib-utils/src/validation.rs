//! # Validation Utilities
//!
//! Input validation helpers. Each returns the user-facing message on failure.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", field_name))
    } else {
        Ok(())
    }
}

/// Validate maximum length in characters.
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> Result<(), String> {
    if value.chars().count() > max {
        Err(format!("{} must be less than {} characters", field_name, max))
    } else {
        Ok(())
    }
}

/// Validate that an amount is finite and at least `min`.
pub fn validate_min_amount(value: f64, min: f64, field_name: &str) -> Result<(), String> {
    if !value.is_finite() {
        Err(format!("Please enter a valid {}", field_name.to_lowercase()))
    } else if value < min {
        Err(format!("{} must be at least {}", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate that an amount is finite and not negative.
pub fn validate_non_negative(value: f64, field_name: &str) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        Err(format!("{} cannot be negative", field_name))
    } else {
        Ok(())
    }
}
