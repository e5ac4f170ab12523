//! Shared input validators
//!
//! Each calculator defines its own numeric domain and supplies its own
//! human-readable message; these helpers only enforce the bound and fail
//! fast with an `OutOfRange` error before any computation runs.

use crate::error::CalcError;

/// Require a strictly positive value
pub fn require_positive(value: f64, message: &str) -> Result<(), CalcError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::out_of_range(message))
    }
}

/// Require `value >= min`
pub fn require_at_least(value: f64, min: f64, message: &str) -> Result<(), CalcError> {
    if value >= min && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::out_of_range(message))
    }
}

/// Require `min <= value <= max`
pub fn require_range(value: f64, min: f64, max: f64, message: &str) -> Result<(), CalcError> {
    if value >= min && value <= max && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::out_of_range(message))
    }
}

/// Require `0 < value <= max`
pub fn require_positive_up_to(value: f64, max: f64, message: &str) -> Result<(), CalcError> {
    if value > 0.0 && value <= max && value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::out_of_range(message))
    }
}

/// Require a positive integer count (tenure in months), bounded above
pub fn require_positive_months(value: u32, max: u32, message: &str) -> Result<(), CalcError> {
    if value >= 1 && value <= max {
        Ok(())
    } else {
        Err(CalcError::out_of_range(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert!(require_positive(0.01, "m").is_ok());
        assert!(require_positive(0.0, "m").is_err());
        assert!(require_positive(-5.0, "m").is_err());
        assert!(require_positive(f64::NAN, "m").is_err());
        assert!(require_positive(f64::INFINITY, "m").is_err());
    }

    #[test]
    fn test_range() {
        assert!(require_range(1.0, 1.0, 20.0, "m").is_ok());
        assert!(require_range(20.0, 1.0, 20.0, "m").is_ok());
        assert!(require_range(0.99, 1.0, 20.0, "m").is_err());
        assert!(require_range(20.01, 1.0, 20.0, "m").is_err());
    }

    #[test]
    fn test_message_propagates() {
        let err = require_range(25.0, 1.0, 15.0, "Interest rate must be between 1% and 15%")
            .unwrap_err();
        assert_eq!(err.to_string(), "Interest rate must be between 1% and 15%");
    }

    #[test]
    fn test_positive_months() {
        assert!(require_positive_months(1, 1200, "m").is_ok());
        assert!(require_positive_months(1200, 1200, "m").is_ok());
        assert!(require_positive_months(0, 1200, "m").is_err());
        assert!(require_positive_months(1201, 1200, "m").is_err());
    }
}
