//! Error handling for the validation library
//!
//! Every failure reason a validator can report is a variant of
//! [`ValidationError`]. The caller-facing validators never surface these
//! directly; they are rendered into the `message` of a
//! [`FieldValidation`](crate::report::FieldValidation).

use std::fmt;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Enum representing different validation error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is blank
    #[error("{0} is required")]
    MissingField(String),

    /// Input could not be read as a number
    #[error("Must be a valid number")]
    NotANumber(String),

    /// Input is outside the accepted numeric range
    #[error("{0}")]
    OutOfRange(String),

    /// Cleaned input has the wrong number of digits
    #[error("{document} must have {expected} digits, got {actual}")]
    InvalidLength {
        document: &'static str,
        expected: usize,
        actual: usize,
    },

    /// All digits are the same, which every check-digit scheme accepts
    #[error("{0} cannot be a repeated digit sequence")]
    RepeatedDigits(&'static str),

    /// A computed check digit does not match the supplied one
    #[error("{document} check digit {position} should be {expected}, found {found}")]
    CheckDigitMismatch {
        document: &'static str,
        position: usize,
        expected: u32,
        found: u32,
    },

    /// Input format is invalid
    #[error("{0}")]
    InvalidFormat(String),

    /// Numeric bounds were constructed with min greater than max
    #[error("Invalid bounds: minimum {min} is greater than maximum {max}")]
    InvalidBounds { min: f64, max: f64 },

    /// Locale code is not one the formatter knows
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Currency code is not one the formatter knows
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Composite validation error (multiple errors)
    #[error("{0}")]
    Composite(CompositeError),

    /// Generic validation error
    #[error("{0}")]
    Generic(String),
}

/// Container for multiple validation errors
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeError {
    /// Collection of validation errors
    pub errors: Vec<ValidationError>,
    /// Field the errors belong to, if any
    pub field: Option<String>,
}

impl fmt::Display for CompositeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
        match &self.field {
            Some(field) => write!(f, "{}: {}", field, messages.join("; ")),
            None => write!(f, "{}", messages.join("; ")),
        }
    }
}

impl ValidationError {
    /// Create a new generic validation error with a message
    pub fn new<S: Into<String>>(message: S) -> Self {
        ValidationError::Generic(message.into())
    }

    /// Create a new composite validation error from a collection of errors
    pub fn composite<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        Self::collect(errors.into_iter().collect(), None)
    }

    /// Create a composite error attributed to a named field
    pub fn composite_at<I, S>(errors: I, field: S) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
        S: Into<String>,
    {
        Self::collect(errors.into_iter().collect(), Some(field.into()))
    }

    fn collect(mut errors: Vec<ValidationError>, field: Option<String>) -> Self {
        // A single error is returned as-is
        if errors.len() == 1 {
            if let Some(err) = errors.pop() {
                return err;
            }
        }
        ValidationError::Composite(CompositeError { errors, field })
    }

    /// Returns true if this error came from a check-digit or length check on a tax identifier
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidLength { .. }
                | ValidationError::RepeatedDigits(_)
                | ValidationError::CheckDigitMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let err = ValidationError::new("Test error");
        assert!(matches!(err, ValidationError::Generic(_)));
        assert_eq!(err.to_string(), "Test error");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::MissingField("Name".to_string()).to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::NotANumber("abc".to_string()).to_string(),
            "Must be a valid number"
        );
        let err = ValidationError::InvalidLength {
            document: "CPF",
            expected: 11,
            actual: 5,
        };
        assert_eq!(err.to_string(), "CPF must have 11 digits, got 5");
        assert!(err.is_document_error());
        assert!(!ValidationError::new("x").is_document_error());
    }

    #[test]
    fn test_composite_error() {
        let errs = vec![
            ValidationError::MissingField("Name".to_string()),
            ValidationError::InvalidFormat("Invalid email".to_string()),
        ];

        let composite = ValidationError::composite_at(errs, "customer");

        if let ValidationError::Composite(comp) = &composite {
            assert_eq!(comp.errors.len(), 2);
        } else {
            panic!("Expected composite error");
        }
        assert_eq!(
            composite.to_string(),
            "customer: Name is required; Invalid email"
        );

        // A single error unwraps to the original
        let single_err = ValidationError::RepeatedDigits("CNPJ");
        let composite_single = ValidationError::composite(vec![single_err.clone()]);
        assert_eq!(composite_single, single_err);
    }
}
