//! Mask formatting for CPF, CNPJ and phone numbers

use lazy_static::lazy_static;
use regex::Regex;

use super::FormatOutcome;
use crate::sanitizers::clean_digits;

lazy_static! {
    static ref CPF_MASK: Regex = Regex::new(r"(\d{3})(\d{3})(\d{3})(\d{2})").unwrap();
    static ref CNPJ_MASK: Regex = Regex::new(r"(\d{2})(\d{3})(\d{3})(\d{4})(\d{2})").unwrap();
    static ref LANDLINE_MASK: Regex = Regex::new(r"^(\d{2})(\d{4})(\d{4})$").unwrap();
    static ref MOBILE_MASK: Regex = Regex::new(r"^(\d{2})(\d{5})(\d{4})$").unwrap();
}

/// Apply `mask` to the cleaned digits; exact when the digit count matches
fn apply_mask(mask: &Regex, replacement: &str, input: &str, expected: usize) -> FormatOutcome {
    let digits = clean_digits(input);
    let rendered = mask.replace(&digits, replacement).into_owned();
    if digits.len() == expected {
        FormatOutcome::Formatted(rendered)
    } else {
        FormatOutcome::Unformattable(rendered)
    }
}

/// Render a CPF as `DDD.DDD.DDD-DD`, reporting whether it had 11 digits
///
/// Shorter input passes through as bare digits; longer input has the mask
/// applied to its first 11 digits with the rest appended.
pub fn try_format_individual_id(input: &str) -> FormatOutcome {
    apply_mask(&CPF_MASK, "$1.$2.$3-$4", input, 11)
}

/// Render a CPF as `DDD.DDD.DDD-DD`
pub fn format_individual_id(input: &str) -> String {
    try_format_individual_id(input).into_string()
}

/// Render a CNPJ as `DD.DDD.DDD/DDDD-DD`, reporting whether it had 14 digits
pub fn try_format_business_id(input: &str) -> FormatOutcome {
    apply_mask(&CNPJ_MASK, "$1.$2.$3/$4-$5", input, 14)
}

/// Render a CNPJ as `DD.DDD.DDD/DDDD-DD`
pub fn format_business_id(input: &str) -> String {
    try_format_business_id(input).into_string()
}

/// Pick the CPF mask for up to 11 digits, the CNPJ mask otherwise
pub fn try_format_identifier(input: &str) -> FormatOutcome {
    if clean_digits(input).len() <= 11 {
        try_format_individual_id(input)
    } else {
        try_format_business_id(input)
    }
}

/// Render a document with the CPF or CNPJ mask depending on its length
pub fn format_identifier(input: &str) -> String {
    try_format_identifier(input).into_string()
}

/// Render a 10-digit landline or 11-digit mobile number with its area code
///
/// Any other digit count yields the input unchanged.
pub fn try_format_phone(input: &str) -> FormatOutcome {
    let digits = clean_digits(input);
    match digits.len() {
        10 => FormatOutcome::Formatted(LANDLINE_MASK.replace(&digits, "($1) $2-$3").into_owned()),
        11 => FormatOutcome::Formatted(MOBILE_MASK.replace(&digits, "($1) $2-$3").into_owned()),
        _ => FormatOutcome::Unformattable(input.to_string()),
    }
}

/// Render a phone number as `(DD) DDDD-DDDD` or `(DD) DDDDD-DDDD`
pub fn format_phone(input: &str) -> String {
    try_format_phone(input).into_string()
}
