//! Library configuration
//!
//! Locale and currency are set per deployment through environment variables
//! (or a `.env` file), so a store outside Brazil can switch amount rendering
//! without code changes.

use std::env;
use std::str::FromStr;

use crate::locale::{Currency, CurrencyFormat, Locale};
use crate::validators::NumericBounds;

pub const LOCALE_VAR: &str = "PDV_LOCALE";
pub const CURRENCY_VAR: &str = "PDV_CURRENCY";
pub const NUMERIC_MIN_VAR: &str = "PDV_NUMERIC_MIN";

/// Configuration for the validation library
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationConfig {
    /// Locale and currency used by currency formatting
    pub currency_format: CurrencyFormat,
    /// Default inclusive minimum for numeric fields
    pub numeric_min: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            currency_format: CurrencyFormat::default(),
            numeric_min: 0.0,
        }
    }
}

impl ValidationConfig {
    /// Load configuration from the environment, reading `.env` if present
    ///
    /// Invalid values are logged and replaced by their defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            currency_format: CurrencyFormat::new(
                parse_or_default(&lookup, LOCALE_VAR, defaults.currency_format.locale),
                parse_or_default(&lookup, CURRENCY_VAR, defaults.currency_format.currency),
            ),
            numeric_min: numeric_min_or_default(&lookup, defaults.numeric_min),
        }
    }

    pub fn locale(&self) -> Locale {
        self.currency_format.locale
    }

    pub fn currency(&self) -> Currency {
        self.currency_format.currency
    }

    /// Default bounds for numeric fields: the configured minimum, no maximum
    pub fn numeric_bounds(&self) -> NumericBounds {
        NumericBounds::at_least(self.numeric_min).unwrap_or_default()
    }
}

fn parse_or_default<T, F>(lookup: &F, var_name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    <T as FromStr>::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var_name) {
        None => default,
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::warn!("Invalid {} ({}), using default {}", var_name, e, default);
            default
        }),
    }
}

/// Minimum for numeric fields; non-finite values fall back to `default`
fn numeric_min_or_default<F>(lookup: &F, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    let min = parse_or_default(lookup, NUMERIC_MIN_VAR, default);
    if !min.is_finite() {
        log::warn!(
            "Invalid {} (bound must be finite, got {}), using default {}",
            NUMERIC_MIN_VAR,
            min,
            default
        );
        return default;
    }
    min
}

/// Get a new default configuration
pub fn default_config() -> ValidationConfig {
    ValidationConfig::default()
}
