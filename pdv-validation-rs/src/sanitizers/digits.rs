//! Digit and decimal sanitizers
//!
//! Identifier, phone and currency inputs are all compared after reducing
//! them to a small alphabet: ASCII digits, plus `.` and `,` for amounts.

fn keep_allowed_chars<F>(input: &str, allowed: F) -> String
where
    F: Fn(char) -> bool,
{
    input.chars().filter(|c| allowed(*c)).collect()
}

/// Remove every character that is not an ASCII digit
pub fn clean_digits(input: &str) -> String {
    keep_allowed_chars(input, |c| c.is_ascii_digit())
}

/// Keep only ASCII digits, `.` and `,`
pub fn amount_chars(input: &str) -> String {
    keep_allowed_chars(input, |c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Replace the first decimal comma with a dot
pub fn comma_to_dot(input: &str) -> String {
    input.replacen(',', ".", 1)
}

/// Reduce currency text to digits with at most one leading decimal comma turned into a dot
///
/// `"R$ 12,50"` becomes `"12.50"`.
pub fn normalize_amount(input: &str) -> String {
    comma_to_dot(&amount_chars(input))
}
