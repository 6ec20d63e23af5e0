//! Rate differential computation and carry classification
//!
//! For every catalog pair with both legs priced, the classifier emits a long
//! (buy base) and a short (sell base) record. The two records always carry
//! opposite differentials, so at most one of them earns.

use crate::catalog::PairCatalog;
use crate::commentary::{RiskLevel, TrendThresholds, TrendTier};
use crate::currency::CurrencyPair;
use crate::error::{CarryError, Result};
use crate::parser::RateTable;
use serde::Serialize;
use std::fmt;

/// Lower bound of the accepted minimum differential
pub const MIN_DIFFERENTIAL_FLOOR: f64 = 0.0;
/// Upper bound of the accepted minimum differential
pub const MIN_DIFFERENTIAL_CEILING: f64 = 10.0;
/// Default minimum absolute differential, in percentage points
pub const DEFAULT_MIN_DIFFERENTIAL: f64 = 0.1;

/// Side of the base currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    Long,
    Short,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Long => write!(f, "Long"),
            Position::Short => write!(f, "Short"),
        }
    }
}

/// Whether holding a position accrues or costs net interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Carry {
    Earn,
    Pay,
}

impl Carry {
    /// Earn only on a strictly positive differential
    pub fn from_differential(differential: f64) -> Self {
        if differential > 0.0 {
            Carry::Earn
        } else {
            Carry::Pay
        }
    }
}

impl fmt::Display for Carry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Carry::Earn => write!(f, "Earn"),
            Carry::Pay => write!(f, "Pay"),
        }
    }
}

/// Trend commentary attached to a record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnnotation {
    pub tier: TrendTier,
    pub trend_bias: &'static str,
    pub risk_level: RiskLevel,
    pub market_behavior: &'static str,
}

/// One pair/direction row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairDifferential {
    pub pair: CurrencyPair,
    pub position: Position,
    /// Signed differential for this direction, rounded to 3 decimals
    pub differential: f64,
    pub carry: Carry,
    pub base_rate: f64,
    pub quote_rate: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendAnnotation>,
}

impl PairDifferential {
    pub fn is_earning(&self) -> bool {
        self.carry == Carry::Earn
    }
}

/// Round to 3 decimal places from the exact decimal value, ties to even.
/// Negative zero comes back as zero.
pub fn round3(value: f64) -> f64 {
    format!("{:.3}", value).parse::<f64>().unwrap_or(value) + 0.0
}

/// Check a minimum differential against the accepted range
pub fn validate_min_differential(value: f64) -> Result<f64> {
    if value.is_nan() || !(MIN_DIFFERENTIAL_FLOOR..=MIN_DIFFERENTIAL_CEILING).contains(&value) {
        return Err(CarryError::InvalidThreshold {
            value,
            min: MIN_DIFFERENTIAL_FLOOR,
            max: MIN_DIFFERENTIAL_CEILING,
        });
    }
    Ok(value)
}

/// Differential classifier
///
/// # Example
/// ```
/// use carry_drift::catalog::PairCatalog;
/// use carry_drift::classifier::{Carry, DifferentialClassifier};
/// use carry_drift::currency::Currency;
/// use carry_drift::parser::RateTable;
///
/// let rates: RateTable = vec![(Currency::USD, 5.50), (Currency::JPY, 0.10)]
///     .into_iter()
///     .collect();
/// let classifier = DifferentialClassifier::new(PairCatalog::standard(), 0.1).unwrap();
/// let records = classifier.classify(&rates);
///
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].pair.to_string(), "USD/JPY");
/// assert_eq!(records[0].carry, Carry::Earn);
/// assert_eq!(records[1].carry, Carry::Pay);
/// ```
#[derive(Debug, Clone)]
pub struct DifferentialClassifier {
    pairs: PairCatalog,
    min_differential: f64,
    trend: Option<TrendThresholds>,
}

impl DifferentialClassifier {
    /// Create a classifier without trend commentary
    pub fn new(pairs: PairCatalog, min_differential: f64) -> Result<Self> {
        Ok(Self {
            pairs,
            min_differential: validate_min_differential(min_differential)?,
            trend: None,
        })
    }

    /// Attach trend commentary to every emitted record
    pub fn with_commentary(mut self, thresholds: TrendThresholds) -> Result<Self> {
        thresholds.validate()?;
        self.trend = Some(thresholds);
        Ok(self)
    }

    pub fn pairs(&self) -> &PairCatalog {
        &self.pairs
    }

    /// Classify every catalog pair. Long records come first, then short
    /// records, each group in catalog order.
    pub fn classify(&self, rates: &RateTable) -> Vec<PairDifferential> {
        let mut longs = Vec::new();
        let mut shorts = Vec::new();

        for pair in self.pairs.iter() {
            let (Some(base_rate), Some(quote_rate)) = (rates.get(pair.base), rates.get(pair.quote))
            else {
                continue;
            };
            let diff = base_rate - quote_rate;
            if diff.abs() < self.min_differential {
                log::debug!(
                    "{} below minimum differential ({:.3} < {})",
                    pair,
                    diff.abs(),
                    self.min_differential
                );
                continue;
            }

            longs.push(self.record(*pair, Position::Long, diff, base_rate, quote_rate));
            shorts.push(self.record(*pair, Position::Short, -diff, base_rate, quote_rate));
        }

        longs.extend(shorts);
        longs
    }

    fn record(
        &self,
        pair: CurrencyPair,
        position: Position,
        diff: f64,
        base_rate: f64,
        quote_rate: f64,
    ) -> PairDifferential {
        let description = match position {
            Position::Long => format!("Buy {}, Sell {}", pair.base, pair.quote),
            Position::Short => format!("Sell {}, Buy {}", pair.base, pair.quote),
        };
        let trend = self.trend.map(|thresholds| {
            let outlook = thresholds.outlook(diff);
            TrendAnnotation {
                tier: outlook.tier,
                trend_bias: outlook.trend_bias,
                risk_level: outlook.risk_level,
                market_behavior: outlook.market_behavior,
            }
        });

        PairDifferential {
            pair,
            position,
            differential: round3(diff),
            carry: Carry::from_differential(diff),
            base_rate,
            quote_rate,
            description,
            trend,
        }
    }
}
