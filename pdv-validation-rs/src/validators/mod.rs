//! Validator functions
//!
//! Each validator has a typed form returning [`ValidationResult`] and a
//! caller-facing form that never fails: a `bool` or a
//! [`FieldValidation`](crate::report::FieldValidation).
//!
//! [`ValidationResult`]: crate::ValidationResult

pub mod currency;
pub mod numeric;
pub mod phone;
pub mod string;
pub mod tax_id;

// Re-export all validators for convenience
pub use currency::*;
pub use numeric::*;
pub use phone::*;
pub use string::*;
pub use tax_id::*;
