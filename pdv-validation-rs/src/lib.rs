//! # PDV Validation Library
//!
//! Document validation and formatting for the PDV point-of-sale system.
//! Form inputs across the sales, stock, budget and expense screens call into
//! this crate on every keystroke or blur and render the result it returns.
//!
//! ## Features
//!
//! - CPF and CNPJ check-digit validation and classification
//! - Masks for documents and phone numbers, localized currency rendering
//! - Required, numeric, email, phone and currency field validators
//! - Fluent per-value validation and form-level schemas
//!
//! Every function is pure: no I/O, no shared mutable state. Malformed input
//! is a negative result, never a panic.

mod builder;
pub mod config;
mod errors;
pub mod formatters;
pub mod locale;
pub mod report;
pub mod sanitizers;
mod schema;
pub mod validators;

pub use builder::ValidationBuilder;
pub use config::{default_config, ValidationConfig};
pub use errors::{CompositeError, ValidationError, ValidationResult};
pub use formatters::{
    format_business_id, format_currency, format_identifier, format_individual_id, format_phone,
    FormatOutcome,
};
pub use locale::{Currency, CurrencyFormat, Locale};
pub use report::{FieldValidation, IdentifierKind, IdentifierValidation};
pub use schema::{FieldRule, FieldSchema, FormReport, FormSchema, FormSchemaBuilder};
pub use validators::{
    validate_business_id, validate_currency, validate_email, validate_identifier,
    validate_individual_id, validate_numeric_field, validate_phone, validate_required_field,
    NumericBounds,
};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::builder::ValidationBuilder;
    pub use crate::errors::{ValidationError, ValidationResult};
    pub use crate::formatters;
    pub use crate::locale::{Currency, CurrencyFormat, Locale};
    pub use crate::report::{FieldValidation, IdentifierKind, IdentifierValidation};
    pub use crate::schema::{FieldRule, FieldSchema, FormSchema};
    pub use crate::validators;
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate input with default settings
pub fn validate<T>(input: T) -> ValidationBuilder<T> {
    ValidationBuilder::new(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_top_level_api() {
        assert!(validate_individual_id("123.456.789-09"));
        assert!(validate_business_id("11.222.333/0001-81"));
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(
            format_currency(1234.56, &default_config().currency_format),
            "R$\u{a0}1.234,56"
        );
        assert!(validate("loja@pdv.com.br").required("Email").email().finish().is_ok());
    }
}
