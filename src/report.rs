//! Earn/Pay views and summary counters over a set of classified records

use crate::classifier::{Carry, PairDifferential, Position};
use crate::commentary::TrendThresholds;
use serde::Serialize;

/// Headline counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CarrySummary {
    /// All records, long and short
    pub total_opportunities: usize,
    pub earn_opportunities: usize,
    /// Pairs whose long differential exceeds the large threshold
    pub high_impact_pairs: usize,
    /// Pairs in the moderate band
    pub moderate_pairs: usize,
}

/// Classified records with the views the front end renders
#[derive(Debug, Clone, Serialize)]
pub struct CarryReport {
    records: Vec<PairDifferential>,
    #[serde(skip)]
    thresholds: TrendThresholds,
}

impl CarryReport {
    pub fn new(records: Vec<PairDifferential>) -> Self {
        Self::with_thresholds(records, TrendThresholds::default())
    }

    pub fn with_thresholds(records: Vec<PairDifferential>, thresholds: TrendThresholds) -> Self {
        Self {
            records,
            thresholds,
        }
    }

    pub fn records(&self) -> &[PairDifferential] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Records for one side, in classifier order
    pub fn side(&self, position: Position) -> impl Iterator<Item = &PairDifferential> {
        self.records.iter().filter(move |r| r.position == position)
    }

    /// Earning records for a side, largest differential first
    pub fn earning(&self, position: Position) -> Vec<&PairDifferential> {
        let mut out: Vec<&PairDifferential> = self
            .side(position)
            .filter(|r| r.carry == Carry::Earn)
            .collect();
        out.sort_by(|a, b| b.differential.total_cmp(&a.differential));
        out
    }

    /// Paying records for a side, most negative differential first
    pub fn paying(&self, position: Position) -> Vec<&PairDifferential> {
        let mut out: Vec<&PairDifferential> = self
            .side(position)
            .filter(|r| r.carry == Carry::Pay)
            .collect();
        out.sort_by(|a, b| a.differential.total_cmp(&b.differential));
        out
    }

    /// Long records whose magnitude exceeds the large threshold
    pub fn high_impact(&self) -> Vec<&PairDifferential> {
        self.side(Position::Long)
            .filter(|r| r.differential.abs() > self.thresholds.large)
            .collect()
    }

    pub fn summary(&self) -> CarrySummary {
        let long_magnitudes = || self.side(Position::Long).map(|r| r.differential.abs());
        CarrySummary {
            total_opportunities: self.records.len(),
            earn_opportunities: self.records.iter().filter(|r| r.is_earning()).count(),
            high_impact_pairs: long_magnitudes()
                .filter(|m| *m > self.thresholds.large)
                .count(),
            moderate_pairs: long_magnitudes()
                .filter(|m| *m > self.thresholds.moderate && *m <= self.thresholds.large)
                .count(),
        }
    }
}
