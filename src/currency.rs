//! Currency and currency pair types

use crate::error::{CarryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Major currencies covered by the central bank catalog (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Australian Dollar
    AUD,
    /// New Zealand Dollar
    NZD,
    /// Japanese Yen
    JPY,
    /// Canadian Dollar
    CAD,
    /// Swiss Franc
    CHF,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::CHF => "CHF",
        }
    }

    /// Parse from ISO code (exact, upper case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "AUD" => Some(Currency::AUD),
            "NZD" => Some(Currency::NZD),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "CHF" => Some(Currency::CHF),
            _ => None,
        }
    }

    /// Get all supported currencies
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::AUD,
            Currency::NZD,
            Currency::JPY,
            Currency::CAD,
            Currency::CHF,
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CarryError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::from_code(s).ok_or_else(|| CarryError::UnknownCurrency(s.to_string()))
    }
}

/// Currency pair quoted as `BASE/QUOTE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    pub base: Currency,
    pub quote: Currency,
}

impl CurrencyPair {
    /// Create new currency pair
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Get the inverse pair
    pub fn inverse(&self) -> Self {
        Self {
            base: self.quote,
            quote: self.base,
        }
    }

    /// True if either leg is the given currency
    pub fn involves(&self, currency: Currency) -> bool {
        self.base == currency || self.quote == currency
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = CarryError;

    fn from_str(s: &str) -> Result<Self> {
        let (base, quote) = s
            .split_once('/')
            .ok_or_else(|| CarryError::InvalidPair(s.to_string()))?;
        let base: Currency = base.parse()?;
        let quote: Currency = quote.parse()?;
        if base == quote {
            return Err(CarryError::InvalidPair(s.to_string()));
        }
        Ok(Self::new(base, quote))
    }
}

impl Serialize for CurrencyPair {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CurrencyPair {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::NZD.code(), "NZD");
        assert_eq!(Currency::CHF.code(), "CHF");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("JPY"), Some(Currency::JPY));
        assert_eq!(Currency::from_code("jpy"), None);
        assert_eq!(Currency::from_code("CNY"), None);
    }

    #[test]
    fn test_all_currencies() {
        let currencies = Currency::all();
        assert_eq!(currencies.len(), 8);
        assert!(currencies.contains(&Currency::AUD));
    }

    #[test]
    fn test_pair_display_and_parse() {
        let pair: CurrencyPair = "EUR/USD".parse().unwrap();
        assert_eq!(pair.base, Currency::EUR);
        assert_eq!(pair.quote, Currency::USD);
        assert_eq!(pair.to_string(), "EUR/USD");
    }

    #[test]
    fn test_pair_parse_rejects_malformed() {
        assert!(matches!(
            "EURUSD".parse::<CurrencyPair>(),
            Err(CarryError::InvalidPair(_))
        ));
        assert!(matches!(
            "EUR/EUR".parse::<CurrencyPair>(),
            Err(CarryError::InvalidPair(_))
        ));
        assert!(matches!(
            "EUR/XYZ".parse::<CurrencyPair>(),
            Err(CarryError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_pair_inverse() {
        let pair = CurrencyPair::new(Currency::AUD, Currency::JPY);
        let inverse = pair.inverse();
        assert_eq!(inverse.to_string(), "JPY/AUD");
        assert!(pair.involves(Currency::JPY));
        assert!(!pair.involves(Currency::USD));
    }

    #[test]
    fn test_pair_serde_as_string() {
        let pair = CurrencyPair::new(Currency::GBP, Currency::CHF);
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, "\"GBP/CHF\"");
        let back: CurrencyPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }
}
