//! The award record
//!
//! An [`Award`] pairs a name and rule variant with its evolving [`AwardState`]
//! and the values it was created with.

use super::error::ValidationError;
use super::rules::{self, AwardState};
use crate::types::{
    AwardKind, BLUE_DISTINCTION_PLUS_QUALITY, MAX_QUALITY, MIN_EXPIRES_IN, MIN_QUALITY,
};
use serde::Serialize;
use std::fmt;

/// A provider-quality award tracked day by day
///
/// Awards are built through [`AwardFactory`](super::AwardFactory), which
/// validates them; after that, [`Award::update_quality`] can never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Award {
    name: String,
    kind: AwardKind,
    state: AwardState,
    original_quality: i32,
    original_expires_in: i32,
}

impl Award {
    /// Assemble an award without validating it
    pub(crate) fn new(name: impl Into<String>, kind: AwardKind, expires_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            state: AwardState::new(quality, expires_in),
            original_quality: quality,
            original_expires_in: expires_in,
        }
    }

    /// Award name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rule variant driving this award
    pub fn kind(&self) -> AwardKind {
        self.kind
    }

    /// Current quality
    pub fn quality(&self) -> i32 {
        self.state.quality
    }

    /// Remaining days until expiry; negative once expired
    pub fn current_day(&self) -> i32 {
        self.state.current_day
    }

    /// Alias of [`Award::current_day`]
    pub fn expires_in(&self) -> i32 {
        self.state.current_day
    }

    /// Quality requested when the award was created
    pub fn original_quality(&self) -> i32 {
        self.original_quality
    }

    /// Expiry countdown requested when the award was created
    pub fn original_expires_in(&self) -> i32 {
        self.original_expires_in
    }

    /// Quality and countdown as a value
    pub fn state(&self) -> AwardState {
        self.state
    }

    /// True when the countdown has gone negative
    pub fn is_expired(&self) -> bool {
        self.state.is_expired()
    }

    /// Advance this award by one simulated day
    pub fn update_quality(&mut self) {
        self.state = rules::next_day(self.kind, self.state);
    }

    /// Check the award against its variant's rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_name()?;
        self.validate_quality()?;
        self.validate_expires_in()
    }

    fn validate_name(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(())
    }

    fn validate_quality(&self) -> Result<(), ValidationError> {
        validate_quality_for(self.kind, self.quality())
    }

    fn validate_expires_in(&self) -> Result<(), ValidationError> {
        if self.original_expires_in < MIN_EXPIRES_IN {
            return Err(ValidationError::ExpiresInOutOfRange {
                expires_in: self.original_expires_in,
                min: MIN_EXPIRES_IN,
            });
        }
        Ok(())
    }
}

/// Check a quality value against the bounds of `kind`
pub fn validate_quality_for(kind: AwardKind, quality: i32) -> Result<(), ValidationError> {
    if kind.has_fixed_quality() {
        if quality != BLUE_DISTINCTION_PLUS_QUALITY {
            return Err(ValidationError::QualityNotFixed {
                quality,
                expected: BLUE_DISTINCTION_PLUS_QUALITY,
            });
        }
        return Ok(());
    }

    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(ValidationError::QualityOutOfRange {
            quality,
            min: MIN_QUALITY,
            max: MAX_QUALITY,
        });
    }
    Ok(())
}

impl fmt::Display for Award {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] quality={} expires_in={}{}",
            self.name,
            self.kind,
            self.quality(),
            self.expires_in(),
            if self.is_expired() { " (expired)" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_award_snapshots_original_values() {
        let award = Award::new("Gov Quality Plus", AwardKind::Generic, 10, 20);

        assert_eq!(award.name(), "Gov Quality Plus");
        assert_eq!(award.quality(), 20);
        assert_eq!(award.expires_in(), 10);
        assert_eq!(award.original_quality(), 20);
        assert_eq!(award.original_expires_in(), 10);
        assert!(!award.is_expired());
    }

    #[test]
    fn test_update_keeps_original_snapshot() {
        let mut award = Award::new("Top Connected Providers", AwardKind::Generic, 3, 6);
        award.update_quality();
        award.update_quality();

        assert_eq!(award.quality(), 4);
        assert_eq!(award.current_day(), 1);
        assert_eq!(award.original_quality(), 6);
        assert_eq!(award.original_expires_in(), 3);
    }

    #[test]
    fn test_is_expired_after_countdown_goes_negative() {
        let mut award = Award::new("Blue Star", AwardKind::BlueStar, 0, 10);
        assert!(!award.is_expired());
        award.update_quality();
        assert!(award.is_expired());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let award = Award::new("   ", AwardKind::Generic, 5, 10);
        assert_eq!(award.validate(), Err(ValidationError::BlankName));
    }

    #[test]
    fn test_validate_quality_bounds() {
        assert!(Award::new("x", AwardKind::Generic, 5, 0).validate().is_ok());
        assert!(Award::new("x", AwardKind::Generic, 5, 50).validate().is_ok());
        assert!(matches!(
            Award::new("x", AwardKind::Generic, 5, 51).validate(),
            Err(ValidationError::QualityOutOfRange { quality: 51, .. })
        ));
        assert!(matches!(
            Award::new("x", AwardKind::BlueFirst, 5, -1).validate(),
            Err(ValidationError::QualityOutOfRange { quality: -1, .. })
        ));
    }

    #[test]
    fn test_validate_fixed_quality_ignores_range() {
        let pinned = Award::new("Blue Distinction Plus", AwardKind::BlueDistinctionPlus, 0, 80);
        assert!(pinned.validate().is_ok());

        let off = Award::new("Blue Distinction Plus", AwardKind::BlueDistinctionPlus, 0, 40);
        assert_eq!(
            off.validate(),
            Err(ValidationError::QualityNotFixed { quality: 40, expected: 80 })
        );
    }

    #[test]
    fn test_validate_expires_in_floor() {
        assert!(Award::new("x", AwardKind::Generic, -1, 5).validate().is_ok());
        assert_eq!(
            Award::new("x", AwardKind::Generic, -2, 5).validate(),
            Err(ValidationError::ExpiresInOutOfRange { expires_in: -2, min: -1 })
        );
    }

    #[test]
    fn test_display_marks_expired_awards() {
        let award = Award::new("Blue Compare", AwardKind::BlueCompare, -1, 0);
        assert_eq!(award.to_string(), "Blue Compare [Blue Compare] quality=0 expires_in=-1 (expired)");
    }
}
