//! Strategy watchlist
//!
//! A second, coarser tiering of long-side differentials used to build a
//! watchlist of carry candidates and funding shorts.

use crate::classifier::{PairDifferential, Position};
use crate::error::{CarryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WatchlistTier {
    CoreCarry,
    DevelopingCarry,
    Neutral,
    FundingShort,
}

impl WatchlistTier {
    pub fn all() -> [WatchlistTier; 4] {
        [
            WatchlistTier::CoreCarry,
            WatchlistTier::DevelopingCarry,
            WatchlistTier::Neutral,
            WatchlistTier::FundingShort,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WatchlistTier::CoreCarry => "Core Carry",
            WatchlistTier::DevelopingCarry => "Developing Carry",
            WatchlistTier::Neutral => "Neutral",
            WatchlistTier::FundingShort => "Funding Short",
        }
    }

    pub fn strategy_note(&self) -> &'static str {
        match self {
            WatchlistTier::CoreCarry => {
                "Hold long on pullbacks while risk sentiment is supportive; cut on VIX spikes"
            }
            WatchlistTier::DevelopingCarry => {
                "Carry supports the trend; wait for technical confirmation before entry"
            }
            WatchlistTier::Neutral => "Carry is not a driver; trade on technicals and macro news",
            WatchlistTier::FundingShort => {
                "Negative carry on the long side; favour the short or use as a funding leg"
            }
        }
    }
}

impl fmt::Display for WatchlistTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tier boundaries on the signed long-side differential. All comparisons are strict `>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchlistThresholds {
    pub core: f64,
    pub developing: f64,
    pub avoid: f64,
}

impl Default for WatchlistThresholds {
    fn default() -> Self {
        Self {
            core: 2.0,
            developing: 0.5,
            avoid: -1.0,
        }
    }
}

impl WatchlistThresholds {
    pub fn validate(&self) -> Result<()> {
        if !(self.avoid <= self.developing && self.developing <= self.core) {
            return Err(CarryError::Config(format!(
                "watchlist thresholds must satisfy avoid <= developing <= core, got {} / {} / {}",
                self.avoid, self.developing, self.core
            )));
        }
        Ok(())
    }

    pub fn tier(&self, differential: f64) -> WatchlistTier {
        if differential > self.core {
            WatchlistTier::CoreCarry
        } else if differential > self.developing {
            WatchlistTier::DevelopingCarry
        } else if differential > self.avoid {
            WatchlistTier::Neutral
        } else {
            WatchlistTier::FundingShort
        }
    }
}

/// Long records of one watchlist tier
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistGroup<'a> {
    pub tier: WatchlistTier,
    pub records: Vec<&'a PairDifferential>,
}

/// Group long records by tier, keeping record order. Empty tiers are kept.
pub fn build_watchlist<'a>(
    records: &'a [PairDifferential],
    thresholds: &WatchlistThresholds,
) -> Vec<WatchlistGroup<'a>> {
    let mut groups: Vec<WatchlistGroup<'a>> = WatchlistTier::all()
        .into_iter()
        .map(|tier| WatchlistGroup {
            tier,
            records: Vec::new(),
        })
        .collect();

    for record in records.iter().filter(|r| r.position == Position::Long) {
        let tier = thresholds.tier(record.differential);
        if let Some(group) = groups.iter_mut().find(|g| g.tier == tier) {
            group.records.push(record);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PairCatalog;
    use crate::classifier::DifferentialClassifier;
    use crate::currency::Currency;
    use crate::parser::RateTable;

    #[test]
    fn test_tier_boundaries() {
        let t = WatchlistThresholds::default();
        assert_eq!(t.tier(2.5), WatchlistTier::CoreCarry);
        assert_eq!(t.tier(2.0), WatchlistTier::DevelopingCarry);
        assert_eq!(t.tier(0.5), WatchlistTier::Neutral);
        assert_eq!(t.tier(-1.0), WatchlistTier::FundingShort);
        assert_eq!(t.tier(-0.99), WatchlistTier::Neutral);
    }

    #[test]
    fn test_validate() {
        assert!(WatchlistThresholds::default().validate().is_ok());
        let bad = WatchlistThresholds {
            core: 0.1,
            developing: 0.5,
            avoid: -1.0,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_build_watchlist() {
        let rates: RateTable = vec![
            (Currency::USD, 5.50),
            (Currency::EUR, 4.50),
            (Currency::JPY, 0.10),
            (Currency::CHF, 1.75),
        ]
        .into_iter()
        .collect();
        let classifier = DifferentialClassifier::new(PairCatalog::standard(), 0.1).unwrap();
        let records = classifier.classify(&rates);
        let groups = build_watchlist(&records, &WatchlistThresholds::default());

        assert_eq!(groups.len(), 4);
        let core: Vec<String> = groups[0].records.iter().map(|r| r.pair.to_string()).collect();
        // USD/JPY 5.4, USD/CHF 3.75, EUR/JPY 4.4, EUR/CHF 2.75
        assert_eq!(core, vec!["USD/JPY", "USD/CHF", "EUR/JPY", "EUR/CHF"]);
        // CHF/JPY 1.65
        assert_eq!(groups[1].records.len(), 1);
        // EUR/USD -1.0
        assert_eq!(groups[3].records[0].pair.to_string(), "EUR/USD");
        assert!(groups
            .iter()
            .flat_map(|g| g.records.iter())
            .all(|r| r.position == Position::Long));
    }
}
