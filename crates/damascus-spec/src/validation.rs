//! Validation helpers shared by the stack model and transform controls.

use crate::error::{ParamsError, StackError};

/// Validate that a layer thickness is a finite, strictly positive number of
/// millimeters.
///
/// # Example
/// ```
/// use damascus_spec::validation::validate_thickness;
///
/// assert!(validate_thickness(0.8).is_ok());
/// assert!(validate_thickness(0.0).is_err());
/// assert!(validate_thickness(f64::NAN).is_err());
/// ```
pub fn validate_thickness(thickness_mm: f64) -> Result<f64, StackError> {
    if thickness_mm.is_finite() && thickness_mm > 0.0 {
        Ok(thickness_mm)
    } else {
        Err(StackError::InvalidThickness(thickness_mm))
    }
}

/// Validate that `value` lies in the closed range `[min, max]`.
pub fn validate_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    expected: &'static str,
) -> Result<(), ParamsError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ParamsError::new(field, value, expected))
    }
}
