//! Localized currency rendering

use super::FormatOutcome;
use crate::locale::{CurrencyFormat, SymbolPosition};

const NBSP: char = '\u{a0}';

fn group_thousands(integer: u128, separator: char) -> String {
    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

/// Render `amount` as currency text, reporting non-finite amounts as unformattable
///
/// Amounts are rounded half away from zero to the currency's minor units. An
/// amount that rounds to zero is shown without a sign. Amounts too large to
/// count in minor units are unformattable.
pub fn try_format_currency(amount: f64, format: &CurrencyFormat) -> FormatOutcome {
    if !amount.is_finite() {
        return FormatOutcome::Unformattable(amount.to_string());
    }

    let locale = format.locale;
    let minor_units = format.currency.minor_units();
    let scale = 10u128.pow(minor_units);
    let minor = (amount.abs() * scale as f64).round();
    // `as u128` saturates; u128::MAX as f64 rounds up to 2^128
    if minor >= u128::MAX as f64 {
        return FormatOutcome::Unformattable(amount.to_string());
    }
    let scaled = minor as u128;

    let mut number = group_thousands(scaled / scale, locale.group_separator());
    if minor_units > 0 {
        number.push(locale.decimal_separator());
        number.push_str(&format!(
            "{:0width$}",
            scaled % scale,
            width = minor_units as usize
        ));
    }

    let symbol = format.currency.symbol();
    let body = match locale.symbol_position() {
        SymbolPosition::Prefix { spaced: true } => format!("{}{}{}", symbol, NBSP, number),
        SymbolPosition::Prefix { spaced: false } => format!("{}{}", symbol, number),
        SymbolPosition::Suffix => format!("{}{}{}", number, NBSP, symbol),
    };

    if amount < 0.0 && scaled > 0 {
        FormatOutcome::Formatted(format!("-{}", body))
    } else {
        FormatOutcome::Formatted(body)
    }
}

/// Render `amount` as currency text in the given locale and currency
pub fn format_currency(amount: f64, format: &CurrencyFormat) -> String {
    try_format_currency(amount, format).into_string()
}
