//! Currency codes supported by the conversion engine

use crate::error::{OmnicalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currency (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Indian Rupee
    INR,
    /// Japanese Yen
    JPY,
    /// Australian Dollar
    AUD,
    /// Canadian Dollar
    CAD,
    /// Swiss Franc
    CHF,
    /// Chinese Yuan
    CNY,
    /// Hong Kong Dollar
    HKD,
    /// New Zealand Dollar
    NZD,
    /// Swedish Krona
    SEK,
    /// South Korean Won
    KRW,
    /// Singapore Dollar
    SGD,
    /// Norwegian Krone
    NOK,
    /// Mexican Peso
    MXN,
    /// Brazilian Real
    BRL,
    /// Russian Ruble
    RUB,
    /// South African Rand
    ZAR,
    /// Turkish Lira
    TRY,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::INR => "INR",
            Currency::JPY => "JPY",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
            Currency::CNY => "CNY",
            Currency::HKD => "HKD",
            Currency::NZD => "NZD",
            Currency::SEK => "SEK",
            Currency::KRW => "KRW",
            Currency::SGD => "SGD",
            Currency::NOK => "NOK",
            Currency::MXN => "MXN",
            Currency::BRL => "BRL",
            Currency::RUB => "RUB",
            Currency::ZAR => "ZAR",
            Currency::TRY => "TRY",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::INR => "₹",
            Currency::JPY => "¥",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
            Currency::CHF => "CHF",
            Currency::CNY => "¥",
            Currency::HKD => "HK$",
            Currency::NZD => "NZ$",
            Currency::SEK => "kr",
            Currency::KRW => "₩",
            Currency::SGD => "S$",
            Currency::NOK => "kr",
            Currency::MXN => "MX$",
            Currency::BRL => "R$",
            Currency::RUB => "₽",
            Currency::ZAR => "R",
            Currency::TRY => "₺",
        }
    }

    /// Parse from ISO code (case-insensitive)
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "INR" => Ok(Currency::INR),
            "JPY" => Ok(Currency::JPY),
            "AUD" => Ok(Currency::AUD),
            "CAD" => Ok(Currency::CAD),
            "CHF" => Ok(Currency::CHF),
            "CNY" => Ok(Currency::CNY),
            "HKD" => Ok(Currency::HKD),
            "NZD" => Ok(Currency::NZD),
            "SEK" => Ok(Currency::SEK),
            "KRW" => Ok(Currency::KRW),
            "SGD" => Ok(Currency::SGD),
            "NOK" => Ok(Currency::NOK),
            "MXN" => Ok(Currency::MXN),
            "BRL" => Ok(Currency::BRL),
            "RUB" => Ok(Currency::RUB),
            "ZAR" => Ok(Currency::ZAR),
            "TRY" => Ok(Currency::TRY),
            other => Err(OmnicalcError::InvalidInput(format!(
                "Unknown currency: {}",
                other
            ))),
        }
    }

    /// All supported currencies, in select-population order
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::INR,
            Currency::JPY,
            Currency::AUD,
            Currency::CAD,
            Currency::CHF,
            Currency::CNY,
            Currency::HKD,
            Currency::NZD,
            Currency::SEK,
            Currency::KRW,
            Currency::SGD,
            Currency::NOK,
            Currency::MXN,
            Currency::BRL,
            Currency::RUB,
            Currency::ZAR,
            Currency::TRY,
        ]
    }

    /// Default from/to pair for a freshly rendered widget
    pub fn default_pair() -> (Currency, Currency) {
        (Currency::USD, Currency::INR)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::INR.code(), "INR");
        assert_eq!(Currency::TRY.code(), "TRY");
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::INR.symbol(), "₹");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD").unwrap(), Currency::USD);
        assert_eq!(Currency::from_code("usd").unwrap(), Currency::USD);
        assert_eq!(Currency::from_code(" inr ").unwrap(), Currency::INR);
        assert!(Currency::from_code("XXX").is_err());
        assert!(Currency::from_code("").is_err());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(format!("{}", Currency::USD), "USD");
        assert_eq!(format!("{}", Currency::JPY), "JPY");
    }

    #[test]
    fn test_all_currencies() {
        let currencies = Currency::all();
        assert_eq!(currencies.len(), 20);
        assert!(currencies.contains(&Currency::USD));
        assert!(currencies.contains(&Currency::ZAR));
    }

    #[test]
    fn test_default_pair() {
        assert_eq!(Currency::default_pair(), (Currency::USD, Currency::INR));
    }
}
