//! Phone number validators

use crate::errors::{ValidationError, ValidationResult};
use crate::sanitizers::clean_digits;

/// Validate that a phone number has an area code and 8 or 9 subscriber digits
pub fn is_phone(s: &str) -> ValidationResult<()> {
    let digits = clean_digits(s);
    match digits.len() {
        10 | 11 => Ok(()),
        n => Err(ValidationError::InvalidFormat(format!(
            "Phone must have 10 or 11 digits, got {}",
            n
        ))),
    }
}

/// Returns true if `value` has 10 or 11 digits once punctuation is removed
pub fn validate_phone(value: &str) -> bool {
    is_phone(value).is_ok()
}
