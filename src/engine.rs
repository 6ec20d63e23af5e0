//! End-to-end analysis: pasted text in, classified report out

use crate::catalog::PairCatalog;
use crate::classifier::DifferentialClassifier;
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::parser::{RateParser, RateTable};
use crate::report::CarryReport;
use crate::watchlist::{build_watchlist, WatchlistGroup};
use serde::Serialize;

/// Output of a single analysis run
#[derive(Debug, Clone, Serialize)]
pub struct CarryAnalysis {
    pub rates: RateTable,
    pub report: CarryReport,
}

/// Parser and classifier wired from one configuration
#[derive(Debug, Clone)]
pub struct CarryEngine {
    config: AnalysisConfig,
    parser: RateParser,
    classifier: DifferentialClassifier,
}

impl CarryEngine {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let banks = config.bank_catalog();
        let pairs = config.pair_catalog(&banks)?;
        let mut classifier = DifferentialClassifier::new(pairs, config.min_differential)?;
        if config.show_commentary {
            classifier = classifier.with_commentary(config.trend)?;
        }

        Ok(Self {
            parser: RateParser::new(banks),
            classifier,
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn parser(&self) -> &RateParser {
        &self.parser
    }

    pub fn pairs(&self) -> &PairCatalog {
        self.classifier.pairs()
    }

    /// Parse the text and classify every pair with both legs present
    pub fn run(&self, text: &str) -> Result<CarryAnalysis> {
        let rates = self.parser.parse(text)?;
        Ok(self.analyze_rates(rates))
    }

    /// Classify an already parsed rate table
    pub fn analyze_rates(&self, rates: RateTable) -> CarryAnalysis {
        let records = self.classifier.classify(&rates);
        if records.is_empty() {
            log::warn!("No pairs found meeting the minimum rate differential criteria");
        } else {
            log::info!(
                "Classified {} records across {} pairs (min differential {})",
                records.len(),
                records.len() / 2,
                self.config.min_differential
            );
        }

        CarryAnalysis {
            rates,
            report: CarryReport::with_thresholds(records, self.config.trend),
        }
    }

    /// Long records grouped into watchlist tiers
    pub fn watchlist<'a>(&self, analysis: &'a CarryAnalysis) -> Vec<WatchlistGroup<'a>> {
        build_watchlist(analysis.report.records(), &self.config.watchlist)
    }
}
