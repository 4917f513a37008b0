//! Currency amount validators
//!
//! Price and payment fields accept what cashiers type: `"12,50"`,
//! `"R$ 12.50"`, `"1.234,56"`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{ValidationError, ValidationResult};
use crate::locale::{Currency, Locale};
use crate::sanitizers::normalize_amount;

lazy_static! {
    static ref LEADING_NUMBER: Regex = Regex::new(r"^(\d+(\.\d*)?|\.\d+)").unwrap();
}

/// Read the longest numeric prefix of normalized amount text
///
/// `"1.234.56"` reads as `1.234`, matching how browsers read form amounts.
fn leading_amount(normalized: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(normalized)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse a typed amount after normalizing it, returning the amount read
///
/// Signs and symbols are discarded, so the result is never negative.
pub fn check_currency(value: &str) -> ValidationResult<f64> {
    let normalized = normalize_amount(value);
    match leading_amount(&normalized) {
        Some(amount) if amount >= 0.0 => Ok(amount),
        _ => Err(ValidationError::InvalidFormat(format!(
            "'{}' is not a valid amount",
            value
        ))),
    }
}

/// Returns true if `value` reads as a non-negative amount
pub fn validate_currency(value: &str) -> bool {
    check_currency(value).is_ok()
}

/// Parse an amount written in `locale`'s own convention
///
/// Group separators are dropped and the locale's decimal separator is read
/// as the decimal point, so `"R$ 1.234,56"` in pt-BR is `1234.56`. A leading
/// `-` makes the amount negative.
pub fn parse_localized_amount(value: &str, locale: Locale) -> ValidationResult<f64> {
    let trimmed = value.trim();
    let negative = trimmed.starts_with('-');
    let group = locale.group_separator();
    let decimal = locale.decimal_separator();

    let number: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == decimal)
        .map(|c| if c == decimal { '.' } else { c })
        .collect();

    let words_ok = trimmed
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .all(is_currency_word);
    if number.is_empty() || !words_ok {
        return Err(ValidationError::NotANumber(value.to_string()));
    }
    // Group separators may only sit between digits of the integer part
    if trimmed.contains(group) && !grouping_is_regular(trimmed, group, decimal) {
        return Err(ValidationError::InvalidFormat(format!(
            "'{}' has misplaced '{}' separators for {}",
            value, group, locale
        )));
    }

    let amount: f64 = number
        .parse()
        .map_err(|_| ValidationError::NotANumber(value.to_string()))?;
    Ok(if negative { -amount } else { amount })
}

/// Returns true if `word` is a supported ISO code (`BRL`, `usd`) or the
/// letters of a currency symbol (`R` of `R$`, `US` of `US$`)
fn is_currency_word(word: &str) -> bool {
    Currency::ALL.iter().any(|currency| {
        currency.code().eq_ignore_ascii_case(word)
            || currency.symbols().iter().any(|symbol| {
                let letters: String = symbol.chars().filter(|c| c.is_alphabetic()).collect();
                letters == word
            })
    })
}

fn grouping_is_regular(text: &str, group: char, decimal: char) -> bool {
    let integer_part: String = text
        .split(decimal)
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == group)
        .collect();
    let mut chunks = integer_part.split(group);
    let head_ok = chunks
        .next()
        .is_some_and(|head| (1..=3).contains(&head.len()));
    head_ok && chunks.all(|chunk| chunk.len() == 3)
}
