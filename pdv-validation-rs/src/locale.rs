//! Locale and currency settings for amount formatting
//!
//! The locale decides separators and where the symbol goes; the currency
//! decides the symbol and how many minor units are shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// Where the currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `R$ 1,00`
    Prefix { spaced: bool },
    /// `1,00 €`
    Suffix,
}

/// Supported formatting locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "de-DE")]
    DeDe,
}

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
            Locale::DeDe => "de-DE",
        }
    }

    pub const fn decimal_separator(self) -> char {
        match self {
            Locale::PtBr | Locale::DeDe => ',',
            Locale::EnUs => '.',
        }
    }

    pub const fn group_separator(self) -> char {
        match self {
            Locale::PtBr | Locale::DeDe => '.',
            Locale::EnUs => ',',
        }
    }

    pub const fn symbol_position(self) -> SymbolPosition {
        match self {
            Locale::PtBr => SymbolPosition::Prefix { spaced: true },
            Locale::EnUs => SymbolPosition::Prefix { spaced: false },
            Locale::DeDe => SymbolPosition::Suffix,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "pt-br" => Ok(Locale::PtBr),
            "en-us" => Ok(Locale::EnUs),
            "de-de" => Ok(Locale::DeDe),
            _ => Err(ValidationError::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Brl,
    Usd,
    Eur,
    Jpy,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Brl, Currency::Usd, Currency::Eur, Currency::Jpy];

    pub const fn code(self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Jpy => "¥",
        }
    }

    /// Symbols accepted when reading typed amounts, display symbol first
    pub const fn symbols(self) -> &'static [&'static str] {
        match self {
            Currency::Brl => &["R$"],
            Currency::Usd => &["$", "US$"],
            Currency::Eur => &["€"],
            Currency::Jpy => &["¥", "JP¥"],
        }
    }

    /// Digits after the decimal separator
    pub const fn minor_units(self) -> u32 {
        match self {
            Currency::Jpy => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Currency::Brl),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "JPY" => Ok(Currency::Jpy),
            _ => Err(ValidationError::UnsupportedCurrency(s.to_string())),
        }
    }
}

/// Locale and currency pair used to render amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub locale: Locale,
    pub currency: Currency,
}

impl CurrencyFormat {
    pub const fn new(locale: Locale, currency: Currency) -> Self {
        Self { locale, currency }
    }
}
