//! Analysis configuration
//!
//! Deserializable with defaults for every field, so a config file only needs
//! the keys it wants to change:
//!
//! ```toml
//! min_differential = 0.25
//! show_commentary = false
//! pair_universe = "permutations"
//!
//! [trend]
//! large = 2.5
//!
//! [banks]
//! "Fed" = "USD"
//! ```

use crate::catalog::{BankCatalog, PairCatalog};
use crate::classifier::{validate_min_differential, DEFAULT_MIN_DIFFERENTIAL};
use crate::commentary::TrendThresholds;
use crate::currency::Currency;
use crate::error::Result;
use crate::watchlist::WatchlistThresholds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which pairs the classifier evaluates
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairUniverse {
    /// The fixed 28-pair catalog
    #[default]
    Standard,
    /// Every ordered pair of catalog currencies
    Permutations,
    /// An explicit list of `BASE/QUOTE` labels
    Custom(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Inclusive floor on `|base - quote|`, within `[0, 10]`
    pub min_differential: f64,
    /// Attach trend bias, risk level and market behaviour to each record
    pub show_commentary: bool,
    pub pair_universe: PairUniverse,
    pub trend: TrendThresholds,
    pub watchlist: WatchlistThresholds,
    /// Extra or overriding bank name → currency entries
    pub banks: BTreeMap<String, Currency>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_differential: DEFAULT_MIN_DIFFERENTIAL,
            show_commentary: true,
            pair_universe: PairUniverse::Standard,
            trend: TrendThresholds::default(),
            watchlist: WatchlistThresholds::default(),
            banks: BTreeMap::new(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        validate_min_differential(self.min_differential)?;
        self.trend.validate()?;
        self.watchlist.validate()?;
        Ok(())
    }

    /// Default banks with configured entries layered on top
    pub fn bank_catalog(&self) -> BankCatalog {
        let defaults = BankCatalog::default();
        let entries: Vec<(String, Currency)> = defaults
            .iter()
            .map(|(name, currency)| (name.to_string(), currency))
            .chain(self.banks.iter().map(|(name, c)| (name.clone(), *c)))
            .collect();
        BankCatalog::from_entries(entries)
    }

    pub fn pair_catalog(&self, banks: &BankCatalog) -> Result<PairCatalog> {
        match &self.pair_universe {
            PairUniverse::Standard => Ok(PairCatalog::standard()),
            PairUniverse::Permutations => Ok(PairCatalog::permutations(&banks.currencies())),
            PairUniverse::Custom(labels) => PairCatalog::from_labels(labels),
        }
    }
}
