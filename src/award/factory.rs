//! Award construction
//!
//! [`AwardFactory`] resolves an award name to its rule variant, seeds the
//! initial state, and validates the result before handing it out.

use super::award::Award;
use super::error::{AwardResult, ConstructionError, ValidationError};
use crate::types::{AwardKind, UNKNOWN_AWARD_NAME};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// The inputs needed to build one award
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardSeed {
    /// Requested award name
    pub name: String,
    /// Days remaining until expiry
    pub expires_in: i32,
    /// Starting quality
    pub quality: i32,
}

impl AwardSeed {
    /// Create a new seed
    pub fn new(name: impl Into<String>, expires_in: i32, quality: i32) -> Self {
        Self { name: name.into(), expires_in, quality }
    }
}

/// Builds validated awards from a name, expiry countdown and quality
#[derive(Debug, Clone, Copy, Default)]
pub struct AwardFactory;

impl AwardFactory {
    /// Build the award named `name`
    ///
    /// Names are matched case-insensitively. Names that match no known award
    /// produce a generic award named "Unknown" rather than an error.
    /// Blue Distinction Plus awards reject any quality other than 80 instead
    /// of coercing it, so their original quality is always 80.
    ///
    /// # Errors
    /// Returns a [`ConstructionError`] carrying the requested inputs when the
    /// name is blank or the values break the resolved variant's rules.
    #[instrument(level = "debug")]
    pub fn get(name: &str, expires_in: i32, quality: i32) -> AwardResult<Award> {
        let fail = |source: ValidationError| {
            warn!("Rejected award {:?} (expires_in={}, quality={}): {}", name, expires_in, quality, source);
            ConstructionError::new(name, expires_in, quality, source)
        };

        // The "Unknown" fallback would otherwise mask an empty name
        if name.trim().is_empty() {
            return Err(fail(ValidationError::BlankName));
        }

        let award = match AwardKind::from_name(name) {
            Some(kind) => Award::new(name, kind, expires_in, quality),
            None => {
                debug!("No award named {:?}, falling back to {}", name, UNKNOWN_AWARD_NAME);
                Award::new(UNKNOWN_AWARD_NAME, AwardKind::Generic, expires_in, quality)
            }
        };

        award.validate().map_err(fail)?;

        debug!("Created award {}", award);
        Ok(award)
    }

    /// Build an award from a seed record
    pub fn from_seed(seed: &AwardSeed) -> AwardResult<Award> {
        Self::get(&seed.name, seed.expires_in, seed.quality)
    }

    /// Build every seed in order, stopping at the first failure
    pub fn from_seeds<'a, I>(seeds: I) -> AwardResult<Vec<Award>>
    where
        I: IntoIterator<Item = &'a AwardSeed>,
    {
        seeds.into_iter().map(Self::from_seed).collect()
    }
}
