//! Qualitative carry commentary
//!
//! Static lookup content keyed on the magnitude and sign of a rate
//! differential, plus the risk-sentiment grouping of the major pairs.
//! Nothing here is computed beyond the tier selection.

use crate::currency::{Currency, CurrencyPair};
use crate::error::{CarryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude bucket of a differential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendTier {
    Large,
    Moderate,
    Small,
}

impl TrendTier {
    /// Rule of thumb for trading a pair in this tier
    pub fn trading_implication(&self) -> &'static str {
        match self {
            TrendTier::Large => "Strong trends but high reversal risk",
            TrendTier::Moderate => "Good balance of carry and manageable risk",
            TrendTier::Small => "Carry has minimal influence on price action",
        }
    }
}

impl fmt::Display for TrendTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendTier::Large => write!(f, "Large"),
            TrendTier::Moderate => write!(f, "Moderate"),
            TrendTier::Small => write!(f, "Small"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

/// Tier boundaries, in percentage points. Both comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendThresholds {
    /// `|diff| > large` is a large differential
    pub large: f64,
    /// `|diff| > moderate` (and not large) is moderate
    pub moderate: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            large: 2.0,
            moderate: 0.5,
        }
    }
}

impl TrendThresholds {
    pub fn validate(&self) -> Result<()> {
        if !(self.moderate >= 0.0 && self.large >= self.moderate) {
            return Err(CarryError::Config(format!(
                "trend thresholds must satisfy 0 <= moderate <= large, got moderate={} large={}",
                self.moderate, self.large
            )));
        }
        Ok(())
    }

    pub fn tier(&self, differential: f64) -> TrendTier {
        let magnitude = differential.abs();
        if magnitude > self.large {
            TrendTier::Large
        } else if magnitude > self.moderate {
            TrendTier::Moderate
        } else {
            TrendTier::Small
        }
    }

    /// Commentary bundle for a signed differential
    pub fn outlook(&self, differential: f64) -> &'static CarryOutlook {
        let positive = differential > 0.0;
        match (self.tier(differential), positive) {
            (TrendTier::Large, true) => &LARGE_POSITIVE,
            (TrendTier::Large, false) => &LARGE_NEGATIVE,
            (TrendTier::Moderate, true) => &MODERATE_POSITIVE,
            (TrendTier::Moderate, false) => &MODERATE_NEGATIVE,
            (TrendTier::Small, _) => &SMALL,
        }
    }
}

/// Fixed descriptive bundle for one tier/sign combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarryOutlook {
    pub tier: TrendTier,
    pub trend_bias: &'static str,
    pub risk_level: RiskLevel,
    pub market_behavior: &'static str,
    pub warning: &'static str,
    pub trading_context: &'static str,
}

static LARGE_POSITIVE: CarryOutlook = CarryOutlook {
    tier: TrendTier::Large,
    trend_bias: "Strongly Bullish in Risk-On",
    risk_level: RiskLevel::High,
    market_behavior: "Trends persistently, shallow pullbacks",
    warning: "Violent reversal risk during risk-off events",
    trading_context: "Classic carry trade - monitor VIX and risk sentiment",
};

static LARGE_NEGATIVE: CarryOutlook = CarryOutlook {
    tier: TrendTier::Large,
    trend_bias: "Bearish in Risk-On / Bullish in Risk-Off",
    risk_level: RiskLevel::High,
    market_behavior: "Often weak in stable markets, spikes in crises",
    warning: "Funding currency - can rally sharply during risk-off",
    trading_context: "Safe haven flows dominate during stress",
};

static MODERATE_POSITIVE: CarryOutlook = CarryOutlook {
    tier: TrendTier::Moderate,
    trend_bias: "Mildly Bullish",
    risk_level: RiskLevel::Medium,
    market_behavior: "Moderate trending, sentiment-dependent",
    warning: "Moderate reversal risk",
    trading_context: "Watch overall risk appetite and central bank guidance",
};

static MODERATE_NEGATIVE: CarryOutlook = CarryOutlook {
    tier: TrendTier::Moderate,
    trend_bias: "Mixed",
    risk_level: RiskLevel::Medium,
    market_behavior: "Range-bound with directional spikes",
    warning: "Carry costs accumulate over time",
    trading_context: "Driven by technicals and other fundamentals",
};

static SMALL: CarryOutlook = CarryOutlook {
    tier: TrendTier::Small,
    trend_bias: "Neutral",
    risk_level: RiskLevel::Low,
    market_behavior: "Driven by other fundamentals",
    warning: "Low carry influence",
    trading_context: "Technical analysis and other macro factors dominate",
};

/// Headline for a high-impact pair in the detailed view
pub fn high_impact_context(differential: f64) -> &'static str {
    if differential > 0.0 {
        "Classic carry trade - monitor risk sentiment closely"
    } else {
        "Funding currency - can spike during risk-off events"
    }
}

/// Risk-sentiment group a pair usually trades with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskSentiment {
    HighRiskAppetite,
    SafeHaven,
    Moderate,
}

const HIGH_RISK_APPETITE_PAIRS: [&str; 5] = ["AUD/JPY", "NZD/JPY", "EUR/AUD", "GBP/AUD", "AUD/NZD"];
const SAFE_HAVEN_PAIRS: [&str; 2] = ["USD/JPY", "USD/CHF"];
const MODERATE_RISK_PAIRS: [&str; 4] = ["EUR/USD", "GBP/USD", "USD/CAD", "EUR/GBP"];

impl RiskSentiment {
    pub fn label(&self) -> &'static str {
        match self {
            RiskSentiment::HighRiskAppetite => "High Risk Appetite (Carry Trades)",
            RiskSentiment::SafeHaven => "Risk Off (Safe Havens)",
            RiskSentiment::Moderate => "Moderate Risk",
        }
    }

    /// Group for a pair. Explicit lists are checked first; any remaining
    /// yen cross falls under safe havens.
    pub fn of(pair: &CurrencyPair) -> Option<RiskSentiment> {
        let label = pair.to_string();
        let listed = |list: &[&str]| list.contains(&label.as_str());
        if listed(&HIGH_RISK_APPETITE_PAIRS) {
            Some(RiskSentiment::HighRiskAppetite)
        } else if listed(&SAFE_HAVEN_PAIRS) || pair.involves(Currency::JPY) {
            Some(RiskSentiment::SafeHaven)
        } else if listed(&MODERATE_RISK_PAIRS) {
            Some(RiskSentiment::Moderate)
        } else {
            None
        }
    }
}

impl fmt::Display for RiskSentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let t = TrendThresholds::default();
        assert_eq!(t.tier(2.0), TrendTier::Moderate);
        assert_eq!(t.tier(2.0001), TrendTier::Large);
        assert_eq!(t.tier(-2.0), TrendTier::Moderate);
        assert_eq!(t.tier(0.5), TrendTier::Small);
        assert_eq!(t.tier(0.5001), TrendTier::Moderate);
        assert_eq!(t.tier(0.0), TrendTier::Small);
    }

    #[test]
    fn test_outlook_bundles() {
        let t = TrendThresholds::default();
        assert_eq!(t.outlook(5.4).trend_bias, "Strongly Bullish in Risk-On");
        assert_eq!(
            t.outlook(-5.4).trend_bias,
            "Bearish in Risk-On / Bullish in Risk-Off"
        );
        assert_eq!(t.outlook(1.0).trend_bias, "Mildly Bullish");
        assert_eq!(t.outlook(-1.0).trend_bias, "Mixed");
        assert_eq!(t.outlook(0.3).trend_bias, "Neutral");
        assert_eq!(t.outlook(-0.3).trend_bias, "Neutral");
        assert_eq!(t.outlook(5.4).risk_level, RiskLevel::High);
        assert_eq!(t.outlook(-1.0).risk_level, RiskLevel::Medium);
        assert_eq!(t.outlook(0.1).risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = TrendThresholds {
            large: 3.0,
            moderate: 1.0,
        };
        assert_eq!(t.tier(2.5), TrendTier::Moderate);
        assert_eq!(t.tier(0.8), TrendTier::Small);
        assert!(t.validate().is_ok());

        let bad = TrendThresholds {
            large: 0.2,
            moderate: 1.0,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_risk_sentiment() {
        let of = |s: &str| RiskSentiment::of(&s.parse().unwrap());
        assert_eq!(of("AUD/JPY"), Some(RiskSentiment::HighRiskAppetite));
        assert_eq!(of("USD/CHF"), Some(RiskSentiment::SafeHaven));
        assert_eq!(of("CAD/JPY"), Some(RiskSentiment::SafeHaven));
        assert_eq!(of("EUR/GBP"), Some(RiskSentiment::Moderate));
        assert_eq!(of("NZD/CHF"), None);
    }

    #[test]
    fn test_high_impact_context() {
        assert!(high_impact_context(3.0).starts_with("Classic carry"));
        assert!(high_impact_context(-3.0).starts_with("Funding currency"));
    }
}
