//! Input normalization utilities
//!
//! Form inputs arrive with masks, currency symbols and stray whitespace.
//! These sanitizers reduce them to the canonical text the validators and
//! formatters work on.

pub mod digits;

pub use digits::*;
