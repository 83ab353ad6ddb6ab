//! Statistics collection and reporting
//!
//! This module summarizes a catalog's awards: how many of each variant, how
//! many have expired, and the spread of their quality scores.

use crate::award::Award;
use crate::types::AwardKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Snapshot summary of a catalog's awards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStatistics {
    /// Total number of awards
    pub total_awards: usize,
    /// Awards whose countdown has gone negative
    pub expired_awards: usize,
    /// Award count per rule variant
    pub awards_by_kind: BTreeMap<AwardKind, usize>,
    /// Lowest quality across all awards (0 when empty)
    pub min_quality: i32,
    /// Highest quality across all awards (0 when empty)
    pub max_quality: i32,
    /// Sum of every award's quality
    pub total_quality: i64,
    /// Number of daily updates applied
    pub days_simulated: usize,
}

impl CatalogStatistics {
    /// Summarize `awards` after `days_simulated` daily updates
    pub fn from_awards(awards: &[Award], days_simulated: usize) -> Self {
        let mut awards_by_kind = BTreeMap::new();
        for award in awards {
            *awards_by_kind.entry(award.kind()).or_insert(0) += 1;
        }

        Self {
            total_awards: awards.len(),
            expired_awards: awards.iter().filter(|a| a.is_expired()).count(),
            awards_by_kind,
            min_quality: awards.iter().map(Award::quality).min().unwrap_or(0),
            max_quality: awards.iter().map(Award::quality).max().unwrap_or(0),
            total_quality: awards.iter().map(|a| i64::from(a.quality())).sum(),
            days_simulated,
        }
    }

    /// Number of awards of the given variant
    pub fn count_of(&self, kind: AwardKind) -> usize {
        self.awards_by_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Number of awards still within their validity window
    pub fn active_awards(&self) -> usize {
        self.total_awards - self.expired_awards
    }

    /// Mean quality across all awards
    pub fn average_quality(&self) -> f64 {
        if self.total_awards == 0 {
            0.0
        } else {
            self.total_quality as f64 / self.total_awards as f64
        }
    }

    /// Percentage of awards that have expired
    pub fn expired_percentage(&self) -> f64 {
        if self.total_awards == 0 {
            0.0
        } else {
            (self.expired_awards as f64 / self.total_awards as f64) * 100.0
        }
    }

    /// Multi-line summary for the end of a run
    pub fn summary_output(&self) -> String {
        let mut output = String::new();
        output.push_str("Award Statistics:\n");
        output.push_str(&format!("  Days Simulated: {}\n", self.days_simulated));
        output.push_str(&format!("  Total Awards: {}\n", self.total_awards));
        output.push_str(&format!(
            "  Expired Awards: {} ({:.1}%)\n",
            self.expired_awards,
            self.expired_percentage()
        ));
        output.push_str(&format!(
            "  Quality: min {} / max {} / avg {:.2}\n",
            self.min_quality,
            self.max_quality,
            self.average_quality()
        ));
        for (kind, count) in &self.awards_by_kind {
            output.push_str(&format!("  {}: {}\n", kind, count));
        }
        output
    }
}

impl fmt::Display for CatalogStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {}: {} awards, {} expired, avg quality {:.2}",
            self.days_simulated,
            self.total_awards,
            self.expired_awards,
            self.average_quality()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::award::AwardFactory;

    fn sample_awards() -> Vec<Award> {
        vec![
            AwardFactory::get("Blue Compare", -1, 10).unwrap(),
            AwardFactory::get("Blue Distinction Plus", 3, 80).unwrap(),
            AwardFactory::get("Gov Quality Plus", 4, 20).unwrap(),
            AwardFactory::get("Top Connected Providers", -1, 0).unwrap(),
        ]
    }

    #[test]
    fn test_statistics_from_awards() {
        let stats = CatalogStatistics::from_awards(&sample_awards(), 2);

        assert_eq!(stats.total_awards, 4);
        assert_eq!(stats.expired_awards, 2);
        assert_eq!(stats.active_awards(), 2);
        assert_eq!(stats.min_quality, 0);
        assert_eq!(stats.max_quality, 80);
        assert_eq!(stats.total_quality, 110);
        assert_eq!(stats.days_simulated, 2);
        assert_eq!(stats.count_of(AwardKind::Generic), 2);
        assert_eq!(stats.count_of(AwardKind::BlueFirst), 0);
    }

    #[test]
    fn test_statistics_percentages() {
        let stats = CatalogStatistics::from_awards(&sample_awards(), 0);

        assert!((stats.average_quality() - 27.5).abs() < f64::EPSILON);
        assert!((stats.expired_percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = CatalogStatistics::from_awards(&[], 0);

        assert_eq!(stats.total_awards, 0);
        assert_eq!(stats.average_quality(), 0.0);
        assert_eq!(stats.expired_percentage(), 0.0);
    }

    #[test]
    fn test_summary_output_lists_kinds() {
        let output = CatalogStatistics::from_awards(&sample_awards(), 1).summary_output();

        assert!(output.contains("Total Awards: 4"));
        assert!(output.contains("Blue Distinction Plus: 1"));
        assert!(output.contains("Generic: 2"));
    }

    #[test]
    fn test_statistics_serialize_kind_keys() {
        let stats = CatalogStatistics::from_awards(&sample_awards(), 1);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["awards_by_kind"]["BlueCompare"], 1);
    }
}
