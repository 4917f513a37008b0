//! String validators
//!
//! Required-field and email checks for customer, supplier and product forms.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{ValidationError, ValidationResult};
use crate::report::FieldValidation;

lazy_static! {
    // Structural check only: something@something.something, no whitespace or extra @
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Validate that a string is not blank after trimming
pub fn not_blank(s: &str, field_name: &str) -> ValidationResult<()> {
    if s.trim().is_empty() {
        Err(ValidationError::MissingField(field_name.to_string()))
    } else {
        Ok(())
    }
}

/// Validate email address shape
pub fn is_email(s: &str) -> ValidationResult<()> {
    if EMAIL_REGEX.is_match(s) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat(
            "Invalid email address".to_string(),
        ))
    }
}

/// Validate a required form field
pub fn validate_required_field(value: &str, field_name: &str) -> FieldValidation {
    not_blank(value, field_name).into()
}

/// Returns true if `value` looks like an email address
pub fn validate_email(value: &str) -> bool {
    is_email(value).is_ok()
}
