//! Rate table parser
//!
//! Turns pasted free text, one `<central bank> <rate>%` observation per line,
//! into a currency → rate mapping. Lines that do not match the pattern, or
//! whose bank is not in the catalog, are dropped without error.

use crate::catalog::BankCatalog;
use crate::currency::Currency;
use crate::error::{CarryError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Label text, whitespace, a decimal number, optional percent sign.
/// Anchored at the start of the line only; anything after the number is ignored.
static RATE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(-?[\d.]+)\s*%?").expect("rate line pattern"));

/// Line boundaries: CRLF, LF, lone CR and the other Unicode line and paragraph separators.
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0b\x0c\x1c-\x1e\x{85}\x{2028}\x{2029}]")
        .expect("line break pattern")
});

/// Split text into lines. A trailing separator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// One matched input line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralBankRate {
    pub bank: String,
    pub currency: Currency,
    pub rate: f64,
}

/// Policy rate per currency, in percent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RateTable {
    rates: BTreeMap<Currency, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rate, replacing any earlier value for the same currency
    pub fn insert(&mut self, currency: Currency, rate: f64) -> Option<f64> {
        self.rates.insert(currency, rate)
    }

    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    pub fn contains(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.rates.iter().map(|(c, r)| (*c, *r))
    }

    /// Rates ordered highest first; ties keep currency order.
    pub fn sorted_by_rate(&self) -> Vec<(Currency, f64)> {
        let mut rates: Vec<(Currency, f64)> = self.iter().collect();
        rates.sort_by(|a, b| b.1.total_cmp(&a.1));
        rates
    }
}

impl FromIterator<(Currency, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (Currency, f64)>>(iter: I) -> Self {
        let mut table = RateTable::new();
        for (currency, rate) in iter {
            table.insert(currency, rate);
        }
        table
    }
}

/// Parser bound to a bank catalog
#[derive(Debug, Clone, Default)]
pub struct RateParser {
    banks: BankCatalog,
}

impl RateParser {
    pub fn new(banks: BankCatalog) -> Self {
        Self { banks }
    }

    pub fn banks(&self) -> &BankCatalog {
        &self.banks
    }

    /// Parse a single line. `None` when the line does not match or the bank is unknown.
    pub fn parse_line(&self, line: &str) -> Option<CentralBankRate> {
        let caps = RATE_LINE.captures(line)?;
        let bank = caps.get(1)?.as_str().trim();
        let currency = self.banks.currency_for(bank)?;
        let rate = caps.get(2)?.as_str().parse::<f64>().ok()?;
        Some(CentralBankRate {
            bank: bank.to_string(),
            currency,
            rate,
        })
    }

    /// Every recognised observation, in input order.
    ///
    /// Fails with [`CarryError::EmptyInput`] on blank text and
    /// [`CarryError::NoValidData`] when no line is recognised.
    pub fn parse_observations(&self, text: &str) -> Result<Vec<CentralBankRate>> {
        if text.trim().is_empty() {
            return Err(CarryError::EmptyInput);
        }

        let mut observations = Vec::new();
        for (lineno, line) in split_lines(text).into_iter().enumerate() {
            match self.parse_line(line) {
                Some(obs) => observations.push(obs),
                None => {
                    if !line.trim().is_empty() {
                        log::debug!("Skipping line {}: {:?}", lineno + 1, line);
                    }
                }
            }
        }

        if observations.is_empty() {
            return Err(CarryError::NoValidData);
        }
        Ok(observations)
    }

    /// Parse text into a rate table; the last observation for a currency wins.
    pub fn parse(&self, text: &str) -> Result<RateTable> {
        let observations = self.parse_observations(text)?;
        log::info!("Found interest rates for {} currencies", observations.len());
        Ok(observations
            .into_iter()
            .map(|obs| (obs.currency, obs.rate))
            .collect())
    }
}
