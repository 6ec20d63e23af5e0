//! # carry_drift
//!
//! Interest-rate differentials and carry classification for the major FX pairs.
//!
//! Paste a table of central bank policy rates, one `<bank> <rate>%` per line,
//! and get back every catalog pair in both directions, each marked as
//! earning or paying carry, with optional trend-bias commentary.
//!
//! ## Example
//!
//! ```rust
//! use carry_drift::prelude::*;
//!
//! let engine = CarryEngine::new(AnalysisConfig::default()).unwrap();
//! let analysis = engine
//!     .run("Federal Reserve 5.50%\nBank of Japan 0.10%")
//!     .unwrap();
//!
//! let long = &analysis.report.records()[0];
//! assert_eq!(long.pair.to_string(), "USD/JPY");
//! assert_eq!(long.carry, Carry::Earn);
//! ```

pub mod catalog;
pub mod classifier;
pub mod commentary;
pub mod config;
pub mod currency;
pub mod engine;
pub mod error;
pub mod export;
pub mod parser;
pub mod report;
pub mod watchlist;

pub mod prelude {
    //! Commonly used types
    pub use crate::catalog::{BankCatalog, PairCatalog};
    pub use crate::classifier::{Carry, DifferentialClassifier, PairDifferential, Position};
    pub use crate::commentary::{RiskLevel, RiskSentiment, TrendThresholds, TrendTier};
    pub use crate::config::{AnalysisConfig, PairUniverse};
    pub use crate::currency::{Currency, CurrencyPair};
    pub use crate::engine::{CarryAnalysis, CarryEngine};
    pub use crate::error::{CarryError, Result};
    pub use crate::parser::{CentralBankRate, RateParser, RateTable};
    pub use crate::report::{CarryReport, CarrySummary};
    pub use crate::watchlist::{WatchlistThresholds, WatchlistTier};
}
