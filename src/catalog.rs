//! Static reference tables: central bank names and tradable pairs
//!
//! Both catalogs are plain immutable values handed to the parser and the
//! classifier. Nothing here is global state.

use crate::currency::{Currency, CurrencyPair};
use crate::error::Result;
use std::collections::HashMap;

/// Default central bank display names and the currency each one sets.
pub const DEFAULT_BANKS: [(&str, Currency); 8] = [
    ("Federal Reserve", Currency::USD),
    ("European Central Bank", Currency::EUR),
    ("Bank of England", Currency::GBP),
    ("Reserve Bank of Australia", Currency::AUD),
    ("Reserve Bank of New Zealand", Currency::NZD),
    ("Bank of Japan", Currency::JPY),
    ("Bank of Canada", Currency::CAD),
    ("Swiss National Bank", Currency::CHF),
];

/// Standard pair universe, in display order.
pub const STANDARD_PAIRS: [&str; 28] = [
    "EUR/USD", "GBP/USD", "USD/JPY", "USD/CHF", "AUD/USD", "USD/CAD", "NZD/USD",
    "EUR/GBP", "EUR/JPY", "EUR/CHF", "EUR/AUD", "EUR/CAD", "EUR/NZD",
    "GBP/JPY", "GBP/CHF", "GBP/AUD", "GBP/CAD", "GBP/NZD",
    "AUD/JPY", "CAD/JPY", "CHF/JPY", "NZD/JPY",
    "AUD/CAD", "AUD/CHF", "AUD/NZD",
    "CAD/CHF", "NZD/CAD", "NZD/CHF",
];

/// Mapping from a central bank display name to its currency.
///
/// Lookups are exact: case and inner whitespace must match the catalog key.
#[derive(Debug, Clone)]
pub struct BankCatalog {
    entries: Vec<(String, Currency)>,
    index: HashMap<String, Currency>,
}

impl BankCatalog {
    /// Build a catalog from explicit entries. A repeated name keeps its last currency.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Currency)>,
        S: Into<String>,
    {
        let mut catalog = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for (name, currency) in entries {
            let name = name.into();
            if catalog.index.insert(name.clone(), currency).is_some() {
                catalog.entries.retain(|(n, _)| n != &name);
            }
            catalog.entries.push((name, currency));
        }
        catalog
    }

    /// Currency for a bank name, if the name is in the catalog
    pub fn currency_for(&self, bank: &str) -> Option<Currency> {
        self.index.get(bank).copied()
    }

    /// Distinct currencies in catalog order
    pub fn currencies(&self) -> Vec<Currency> {
        let mut out: Vec<Currency> = Vec::with_capacity(self.entries.len());
        for (_, currency) in &self.entries {
            if !out.contains(currency) {
                out.push(*currency);
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Currency)> {
        self.entries.iter().map(|(name, c)| (name.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BankCatalog {
    fn default() -> Self {
        Self::from_entries(DEFAULT_BANKS)
    }
}

/// Ordered list of `BASE/QUOTE` pairs the classifier evaluates.
///
/// The standard catalog is asymmetric: `EUR/USD` is present, `USD/EUR` is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCatalog {
    pairs: Vec<CurrencyPair>,
}

impl PairCatalog {
    pub fn new(pairs: Vec<CurrencyPair>) -> Self {
        let mut unique = Vec::with_capacity(pairs.len());
        for pair in pairs {
            if !unique.contains(&pair) {
                unique.push(pair);
            }
        }
        Self { pairs: unique }
    }

    /// The fixed 28-pair catalog
    pub fn standard() -> Self {
        let pairs = STANDARD_PAIRS
            .iter()
            .filter_map(|label| label.parse().ok())
            .collect();
        Self { pairs }
    }

    /// Parse a catalog from `BASE/QUOTE` labels
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let pairs = labels
            .iter()
            .map(|label| label.as_ref().trim().parse())
            .collect::<Result<Vec<CurrencyPair>>>()?;
        Ok(Self::new(pairs))
    }

    /// Every ordered pair of distinct currencies, both directions included.
    pub fn permutations(currencies: &[Currency]) -> Self {
        let mut pairs = Vec::new();
        for &base in currencies {
            for &quote in currencies {
                if base != quote {
                    pairs.push(CurrencyPair::new(base, quote));
                }
            }
        }
        Self::new(pairs)
    }

    pub fn contains(&self, pair: &CurrencyPair) -> bool {
        self.pairs.contains(pair)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CurrencyPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for PairCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_banks() {
        let banks = BankCatalog::default();
        assert_eq!(banks.len(), 8);
        assert_eq!(banks.currency_for("Federal Reserve"), Some(Currency::USD));
        assert_eq!(banks.currency_for("Bank of Japan"), Some(Currency::JPY));
        assert_eq!(banks.currency_for("federal reserve"), None);
        assert_eq!(banks.currency_for("Federal  Reserve"), None);
        assert_eq!(banks.currencies().len(), 8);
    }

    #[test]
    fn test_bank_catalog_last_entry_wins() {
        let banks = BankCatalog::from_entries(vec![
            ("Fed", Currency::USD),
            ("Fed", Currency::CAD),
        ]);
        assert_eq!(banks.len(), 1);
        assert_eq!(banks.currency_for("Fed"), Some(Currency::CAD));
    }

    #[test]
    fn test_standard_pairs() {
        let pairs = PairCatalog::standard();
        assert_eq!(pairs.len(), 28);
        assert!(pairs.contains(&"EUR/USD".parse().unwrap()));
        assert!(!pairs.contains(&"USD/EUR".parse().unwrap()));
        assert_eq!(pairs.iter().next().unwrap().to_string(), "EUR/USD");
    }

    #[test]
    fn test_standard_pairs_are_asymmetric() {
        let pairs = PairCatalog::standard();
        for pair in pairs.iter() {
            assert!(!pairs.contains(&pair.inverse()), "{} has its inverse", pair);
        }
    }

    #[test]
    fn test_permutations() {
        let pairs = PairCatalog::permutations(&Currency::all());
        assert_eq!(pairs.len(), 56);
        assert!(pairs.contains(&"USD/EUR".parse().unwrap()));
        assert!(pairs.contains(&"EUR/USD".parse().unwrap()));
    }

    #[test]
    fn test_from_labels() {
        let pairs = PairCatalog::from_labels(&["EUR/USD", " USD/JPY ", "EUR/USD"]).unwrap();
        assert_eq!(pairs.len(), 2);
        assert!(PairCatalog::from_labels(&["EUR-USD"]).is_err());
    }
}
