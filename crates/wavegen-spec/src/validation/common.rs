//! Common validation utilities.
//!
//! Reusable checks for the scalar parameter shapes that appear throughout a
//! request: positive values, non-negative values, and unit intervals.

use std::fmt;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

fn ensure_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Validate that a value is in [0, 1] (the unit interval).
///
/// # Example
/// ```
/// use wavegen_spec::validation::common::validate_unit_interval;
///
/// assert!(validate_unit_interval("blend", 0.5).is_ok());
/// assert!(validate_unit_interval("blend", 1.5).is_err());
/// ```
pub fn validate_unit_interval(name: &str, value: f64) -> Result<(), CommonValidationError> {
    ensure_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(CommonValidationError::new(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is positive (> 0).
///
/// # Example
/// ```
/// use wavegen_spec::validation::common::validate_positive;
///
/// assert!(validate_positive("frequency", 440.0).is_ok());
/// assert!(validate_positive("frequency", 0.0).is_err());
/// assert!(validate_positive("frequency", f64::NAN).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is non-negative (>= 0).
///
/// # Example
/// ```
/// use wavegen_spec::validation::common::validate_non_negative;
///
/// assert!(validate_non_negative("duration", 0.0).is_ok());
/// assert!(validate_non_negative("duration", -0.5).is_err());
/// ```
pub fn validate_non_negative(name: &str, value: f64) -> Result<(), CommonValidationError> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be non-negative, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is finite (not NaN or infinite).
pub fn validate_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    ensure_finite(name, value)
}
