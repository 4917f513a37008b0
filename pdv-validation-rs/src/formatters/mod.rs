//! Display formatting for documents, phones and amounts
//!
//! Formatting never validates. Each formatter comes in two forms: a plain
//! function that always returns text, passing malformed input through, and a
//! `try_` twin that reports whether the input had the expected shape.

pub mod currency;
pub mod document;

pub use currency::*;
pub use document::*;

/// Result of a strict formatting attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Input matched the expected shape exactly
    Formatted(String),
    /// Input did not match; carries the best-effort pass-through text
    Unformattable(String),
}

impl FormatOutcome {
    pub fn is_formatted(&self) -> bool {
        matches!(self, FormatOutcome::Formatted(_))
    }

    /// The rendered text, whichever variant this is
    pub fn as_str(&self) -> &str {
        match self {
            FormatOutcome::Formatted(s) | FormatOutcome::Unformattable(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            FormatOutcome::Formatted(s) | FormatOutcome::Unformattable(s) => s,
        }
    }

    /// The formatted text, or `None` if the input was unformattable
    pub fn formatted(self) -> Option<String> {
        match self {
            FormatOutcome::Formatted(s) => Some(s),
            FormatOutcome::Unformattable(_) => None,
        }
    }
}
