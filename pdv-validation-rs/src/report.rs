//! Result shapes handed back to form inputs
//!
//! The input layer renders these directly, so they serialize to the
//! `isValid` / `type` / `message` keys the UI reads.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationResult;

/// Outcome of validating a single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub is_valid: bool,
    /// Empty when `is_valid` is true
    pub message: String,
}

impl FieldValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

impl<T> From<ValidationResult<T>> for FieldValidation {
    fn from(result: ValidationResult<T>) -> Self {
        match result {
            Ok(_) => FieldValidation::valid(),
            Err(err) => FieldValidation::invalid(err.to_string()),
        }
    }
}

/// Which kind of tax identifier a cleaned input was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentifierKind {
    /// CPF, 11 digits
    Individual,
    /// CNPJ, 14 digits
    Business,
}

impl IdentifierKind {
    /// Number of digits in the cleaned identifier
    pub const fn digit_count(self) -> usize {
        match self {
            IdentifierKind::Individual => 11,
            IdentifierKind::Business => 14,
        }
    }

    /// Short document name used in messages
    pub const fn document_name(self) -> &'static str {
        match self {
            IdentifierKind::Individual => "CPF",
            IdentifierKind::Business => "CNPJ",
        }
    }

    /// Classify by cleaned digit count
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            11 => Some(IdentifierKind::Individual),
            14 => Some(IdentifierKind::Business),
            _ => None,
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.document_name())
    }
}

/// Outcome of classifying and validating a CPF or CNPJ
///
/// Unlike [`FieldValidation`], `message` is populated on success too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierValidation {
    pub is_valid: bool,
    #[serde(rename = "type")]
    pub kind: Option<IdentifierKind>,
    pub message: String,
}

impl IdentifierValidation {
    /// Build the report for a classified identifier
    pub fn classified(kind: IdentifierKind, is_valid: bool) -> Self {
        let message = if is_valid {
            format!("Valid {}", kind)
        } else {
            format!("Invalid {}", kind)
        };
        Self {
            is_valid,
            kind: Some(kind),
            message,
        }
    }

    /// Build the report for input that is neither 11 nor 14 digits long
    pub fn unclassified() -> Self {
        Self {
            is_valid: false,
            kind: None,
            message: "Document must have 11 digits (CPF) or 14 digits (CNPJ)".to_string(),
        }
    }
}

impl From<IdentifierValidation> for FieldValidation {
    fn from(report: IdentifierValidation) -> Self {
        if report.is_valid {
            FieldValidation::valid()
        } else {
            FieldValidation::invalid(report.message)
        }
    }
}
