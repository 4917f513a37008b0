//! Numeric validators
//!
//! Quantity, price and stock fields are typed as text and checked against
//! inclusive bounds after parsing.

use std::str::FromStr;

use log::trace;

use crate::errors::{ValidationError, ValidationResult};
use crate::report::FieldValidation;

/// Inclusive bounds for a numeric field
///
/// The minimum defaults to zero and the maximum is open. Bounds with
/// `min > max` cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBounds {
    min: f64,
    max: Option<f64>,
}

impl Default for NumericBounds {
    fn default() -> Self {
        Self { min: 0.0, max: None }
    }
}

impl NumericBounds {
    /// Bounds with an optional maximum; fails if `min > max` or either is NaN
    pub fn new(min: f64, max: Option<f64>) -> ValidationResult<Self> {
        if min.is_nan() || max.is_some_and(f64::is_nan) {
            return Err(ValidationError::InvalidFormat(
                "Numeric bounds cannot be NaN".to_string(),
            ));
        }
        match max {
            Some(max) if min > max => Err(ValidationError::InvalidBounds { min, max }),
            _ => Ok(Self { min, max }),
        }
    }

    /// Bounds with only a minimum
    pub fn at_least(min: f64) -> ValidationResult<Self> {
        Self::new(min, None)
    }

    /// Inclusive range `[min, max]`
    pub fn between(min: f64, max: f64) -> ValidationResult<Self> {
        Self::new(min, Some(max))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Check a parsed value against these bounds
    pub fn check(&self, value: f64) -> ValidationResult<()> {
        min(value, self.min)?;
        if let Some(upper) = self.max {
            max(value, upper)?;
        }
        Ok(())
    }
}

/// Validate that a value is at least `min`
pub fn min(value: f64, min: f64) -> ValidationResult<()> {
    if value < min {
        Err(ValidationError::OutOfRange(format!(
            "Value must be at least {}",
            min
        )))
    } else {
        Ok(())
    }
}

/// Validate that a value is at most `max`
pub fn max(value: f64, max: f64) -> ValidationResult<()> {
    if value > max {
        Err(ValidationError::OutOfRange(format!(
            "Value must be at most {}",
            max
        )))
    } else {
        Ok(())
    }
}

/// Parse trimmed text as a finite float
///
/// `"inf"` and `"NaN"` are rejected; a decimal comma is not accepted here.
pub fn parse_number(s: &str) -> ValidationResult<f64> {
    match f64::from_str(s.trim()) {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber(s.to_string())),
    }
}

/// Parse text and check it against `bounds`
pub fn check_numeric_field(value: &str, bounds: &NumericBounds) -> ValidationResult<f64> {
    let parsed = parse_number(value)?;
    bounds.check(parsed)?;
    Ok(parsed)
}

/// Validate a numeric form field against inclusive bounds
pub fn validate_numeric_field(value: &str, bounds: &NumericBounds) -> FieldValidation {
    let result = check_numeric_field(value, bounds);
    if let Err(err) = &result {
        trace!("Numeric field rejected: {}", err);
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_bounds_construction() {
        assert_eq!(NumericBounds::default().min(), 0.0);
        assert_eq!(NumericBounds::default().max(), None);
        assert!(NumericBounds::between(1.0, 1.0).is_ok());
        assert_eq!(
            NumericBounds::between(10.0, 1.0),
            Err(ValidationError::InvalidBounds { min: 10.0, max: 1.0 })
        );
        assert!(NumericBounds::at_least(f64::NAN).is_err());
        assert!(NumericBounds::new(0.0, Some(f64::NAN)).is_err());
        assert!(NumericBounds::at_least(-5.0).is_ok());
    }

    #[test]
    fn test_min_max() {
        assert!(min(5.0, 0.0).is_ok());
        assert!(min(0.0, 0.0).is_ok());
        assert!(min(-1.0, 0.0).is_err());

        assert!(max(5.0, 10.0).is_ok());
        assert!(max(10.0, 10.0).is_ok());
        assert!(max(11.0, 10.0).is_err());
    }

    #[test_case("5", true ; "integer")]
    #[test_case(" 5.5 ", true ; "padded float")]
    #[test_case("0", true ; "zero at default minimum")]
    #[test_case("1e3", true ; "exponent")]
    #[test_case("-1", false ; "below default minimum")]
    #[test_case("abc", false ; "letters")]
    #[test_case("", false ; "empty")]
    #[test_case("NaN", false ; "nan")]
    #[test_case("inf", false ; "infinity")]
    #[test_case("5,5", false ; "decimal comma")]
    fn test_default_bounds(input: &str, is_valid: bool) {
        assert_eq!(
            validate_numeric_field(input, &NumericBounds::default()).is_valid,
            is_valid
        );
    }

    #[test]
    fn test_messages() {
        let report = validate_numeric_field("5", &NumericBounds::at_least(10.0).unwrap());
        assert!(!report.is_valid);
        assert!(report.message.contains("10"));

        let report = validate_numeric_field("abc", &NumericBounds::default());
        assert_eq!(report.message, "Must be a valid number");

        let report = validate_numeric_field("150", &NumericBounds::between(0.0, 99.5).unwrap());
        assert!(!report.is_valid);
        assert_eq!(report.message, "Value must be at most 99.5");

        let report = validate_numeric_field("5", &NumericBounds::default());
        assert!(report.is_valid);
        assert!(report.message.is_empty());
    }

    #[test]
    fn test_inclusive_edges() {
        let bounds = NumericBounds::between(1.0, 3.0).unwrap();
        assert_eq!(check_numeric_field("1", &bounds), Ok(1.0));
        assert_eq!(check_numeric_field("3", &bounds), Ok(3.0));
        assert!(check_numeric_field("3.0001", &bounds).is_err());
    }
}
