//! The batch update driver
//!
//! An [`AwardCatalog`] owns an ordered list of awards and advances all of them
//! by one simulated day per call to [`AwardCatalog::update_quality`].

use crate::award::{Award, AwardFactory, AwardResult, AwardSeed};
use crate::simulation::CatalogStatistics;
use tracing::{debug, info, instrument, trace};

/// Ordered collection of awards updated together once per simulated day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwardCatalog {
    /// Awards in insertion order
    awards: Vec<Award>,
    /// Number of daily updates applied so far
    days_elapsed: usize,
}

impl AwardCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog that owns `awards`, keeping their order
    pub fn from_awards(awards: Vec<Award>) -> Self {
        Self { awards, days_elapsed: 0 }
    }

    /// Build every seed through the factory
    ///
    /// # Errors
    /// Returns the first construction failure; no catalog is produced.
    #[instrument(skip(seeds), fields(seed_count = seeds.len()))]
    pub fn from_seeds(seeds: &[AwardSeed]) -> AwardResult<Self> {
        let awards = AwardFactory::from_seeds(seeds)?;
        info!("Built award catalog with {} awards", awards.len());
        Ok(Self::from_awards(awards))
    }

    /// Awards in order
    pub fn awards(&self) -> &[Award] {
        &self.awards
    }

    /// Iterate over the awards in order
    pub fn iter(&self) -> std::slice::Iter<'_, Award> {
        self.awards.iter()
    }

    /// Number of awards
    pub fn len(&self) -> usize {
        self.awards.len()
    }

    /// True when the catalog holds no awards
    pub fn is_empty(&self) -> bool {
        self.awards.is_empty()
    }

    /// Daily updates applied since the catalog was created
    pub fn days_elapsed(&self) -> usize {
        self.days_elapsed
    }

    /// Advance every award by one simulated day, in order
    #[instrument(skip(self), fields(award_count = self.awards.len(), day = self.days_elapsed + 1))]
    pub fn update_quality(&mut self) {
        for award in &mut self.awards {
            award.update_quality();
            trace!("Updated {}", award);
        }
        self.days_elapsed += 1;
        debug!("Completed day {} for {} awards", self.days_elapsed, self.awards.len());
    }

    /// Apply `days` daily updates
    pub fn advance_days(&mut self, days: usize) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// Summarize the catalog's current state
    pub fn statistics(&self) -> CatalogStatistics {
        CatalogStatistics::from_awards(&self.awards, self.days_elapsed)
    }
}

impl<'a> IntoIterator for &'a AwardCatalog {
    type Item = &'a Award;
    type IntoIter = std::slice::Iter<'a, Award>;

    fn into_iter(self) -> Self::IntoIter {
        self.awards.iter()
    }
}
