//! Validation builder pattern
//!
//! A fluent API for running several checks on one form value. Checks run in
//! order and stop at the first failure.

use crate::errors::{ValidationError, ValidationResult};
use crate::report::FieldValidation;
use crate::validators::{self, NumericBounds};

/// Builder for chaining validation rules
#[derive(Debug, Clone)]
pub struct ValidationBuilder<T> {
    state: ValidationResult<T>,
}

impl<T> ValidationBuilder<T> {
    /// Create a new validation builder
    pub fn new(value: T) -> Self {
        Self { state: Ok(value) }
    }

    /// Apply a validation function unless an earlier one failed
    pub fn validate<F>(mut self, validator: F) -> Self
    where
        F: FnOnce(&T) -> ValidationResult<()>,
    {
        if let Ok(value) = &self.state {
            if let Err(err) = validator(value) {
                self.state = Err(err);
            }
        }
        self
    }

    /// Transform the value, e.g. parse text into a number
    pub fn map<U, F>(self, mapper: F) -> ValidationBuilder<U>
    where
        F: FnOnce(T) -> ValidationResult<U>,
    {
        ValidationBuilder {
            state: self.state.and_then(mapper),
        }
    }

    /// Apply a predicate with a custom error message
    pub fn custom<F>(self, f: F, message: &str) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        self.validate(|value| {
            if f(value) {
                Ok(())
            } else {
                Err(ValidationError::new(message))
            }
        })
    }

    /// Finish validation and return the result
    pub fn finish(self) -> ValidationResult<T> {
        self.state
    }

    /// Finish validation as the result shape form inputs render
    pub fn into_field_validation(self) -> FieldValidation {
        self.state.into()
    }

    /// Get a reference to the value (if validation succeeded so far)
    pub fn value(&self) -> Option<&T> {
        self.state.as_ref().ok()
    }

    /// Get the error (if any)
    pub fn error(&self) -> Option<&ValidationError> {
        self.state.as_ref().err()
    }
}

// Text field extensions
impl<S: AsRef<str>> ValidationBuilder<S> {
    /// Fail if the trimmed text is empty
    pub fn required(self, field_name: &str) -> Self {
        self.validate(|s| validators::not_blank(s.as_ref(), field_name))
    }

    pub fn email(self) -> Self {
        self.validate(|s| validators::is_email(s.as_ref()))
    }

    pub fn phone(self) -> Self {
        self.validate(|s| validators::is_phone(s.as_ref()))
    }

    /// Fail unless the text is a CPF with correct check digits
    pub fn individual_id(self) -> Self {
        self.validate(|s| validators::check_individual_id(s.as_ref()).map(|_| ()))
    }

    /// Fail unless the text is a CNPJ with correct check digits
    pub fn business_id(self) -> Self {
        self.validate(|s| validators::check_business_id(s.as_ref()).map(|_| ()))
    }

    /// Fail unless the text is a valid CPF or CNPJ
    pub fn identifier(self) -> Self {
        self.validate(|s| {
            let report = validators::validate_identifier(s.as_ref());
            if report.is_valid {
                Ok(())
            } else {
                Err(ValidationError::InvalidFormat(report.message))
            }
        })
    }

    /// Fail unless the text reads as a non-negative amount
    pub fn currency(self) -> Self {
        self.validate(|s| validators::check_currency(s.as_ref()).map(|_| ()))
    }

    /// Parse the text as a number within `bounds`
    pub fn numeric(self, bounds: &NumericBounds) -> ValidationBuilder<f64> {
        self.map(|s| validators::check_numeric_field(s.as_ref(), bounds))
    }
}

// Numeric validation extension for any type that implements PartialOrd
impl<T: PartialOrd + std::fmt::Display> ValidationBuilder<T> {
    /// Validate that a value is at least the minimum value
    pub fn min(self, min: T) -> Self {
        self.validate(|value| {
            if value < &min {
                Err(ValidationError::OutOfRange(format!(
                    "Value must be at least {}",
                    min
                )))
            } else {
                Ok(())
            }
        })
    }

    /// Validate that a value is at most the maximum value
    pub fn max(self, max: T) -> Self {
        self.validate(|value| {
            if value > &max {
                Err(ValidationError::OutOfRange(format!(
                    "Value must be at most {}",
                    max
                )))
            } else {
                Ok(())
            }
        })
    }

    /// Validate that a value is within a range (inclusive)
    pub fn between(self, min: T, max: T) -> Self {
        self.min(min).max(max)
    }
}
