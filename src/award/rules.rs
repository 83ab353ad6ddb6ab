//! Daily quality rules for each award variant
//!
//! Every rule is a pure function from one day's [`AwardState`] to the next.
//! [`next_day`] dispatches on the variant tag, so adding a variant forces a
//! rule to be written for it.

use crate::types::{AwardKind, QualityRate, MAX_QUALITY, MIN_QUALITY};
use serde::{Deserialize, Serialize};

/// The mutable part of an award: its quality and expiry countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AwardState {
    /// Current quality score
    pub quality: i32,
    /// Days remaining until expiry; negative once expired
    pub current_day: i32,
}

impl AwardState {
    /// Create a state from a quality and expiry countdown
    pub fn new(quality: i32, current_day: i32) -> Self {
        Self { quality, current_day }
    }

    /// True when the countdown has gone negative
    pub fn is_expired(&self) -> bool {
        self.current_day < 0
    }

    fn tick_day(mut self) -> Self {
        self.current_day = self.current_day.saturating_sub(1);
        self
    }
}

/// Advance `state` by one simulated day under the rules of `kind`
pub fn next_day(kind: AwardKind, state: AwardState) -> AwardState {
    match kind {
        AwardKind::Generic => degrade(state, QualityRate::Single),
        AwardKind::BlueStar => degrade(state, QualityRate::Double),
        AwardKind::BlueCompare => blue_compare(state),
        AwardKind::BlueDistinctionPlus => state,
        AwardKind::BlueFirst => blue_first(state),
    }
}

/// Appreciation rate of a Blue Compare award with `current_day` days left
pub fn blue_compare_rate(current_day: i32) -> QualityRate {
    match current_day {
        0..=5 => QualityRate::Triple,
        6..=10 => QualityRate::Double,
        _ => QualityRate::Single,
    }
}

// Expiry is judged after the countdown moves, so the day a generic award
// crosses from 0 to -1 already loses at the expired rate.
fn degrade(state: AwardState, rate: QualityRate) -> AwardState {
    let mut next = state.tick_day();

    if next.quality > MIN_QUALITY {
        let loss = if next.is_expired() { rate.points() * 2 } else { rate.points() };
        next.quality -= loss;
    }

    next.quality = next.quality.max(MIN_QUALITY);
    next
}

fn blue_compare(state: AwardState) -> AwardState {
    let mut next = state;

    if !next.is_expired() && next.quality < MAX_QUALITY {
        let rate = blue_compare_rate(next.current_day);
        next.quality = (next.quality + rate.points()).min(MAX_QUALITY);
    }

    next = next.tick_day();

    if next.is_expired() {
        next.quality = MIN_QUALITY;
    }
    next
}

fn blue_first(state: AwardState) -> AwardState {
    let mut next = state;

    if !next.is_expired() && next.quality < MAX_QUALITY {
        next.quality += QualityRate::Single.points();
    }

    next = next.tick_day();

    if next.is_expired() && next.quality < MAX_QUALITY {
        next.quality += QualityRate::Single.points();
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: AwardKind, quality: i32, current_day: i32, days: usize) -> Vec<AwardState> {
        let mut state = AwardState::new(quality, current_day);
        (0..days)
            .map(|_| {
                state = next_day(kind, state);
                state
            })
            .collect()
    }

    #[test]
    fn test_generic_loses_one_while_unexpired() {
        let next = next_day(AwardKind::Generic, AwardState::new(6, 3));
        assert_eq!(next, AwardState::new(5, 2));
    }

    #[test]
    fn test_generic_loses_two_on_the_day_it_expires() {
        let next = next_day(AwardKind::Generic, AwardState::new(6, 0));
        assert_eq!(next, AwardState::new(4, -1));
    }

    #[test]
    fn test_generic_never_goes_below_zero() {
        let states = run(AwardKind::Generic, 1, 0, 3);
        assert_eq!(states[0], AwardState::new(0, -1));
        assert_eq!(states[1], AwardState::new(0, -2));
        assert_eq!(states[2], AwardState::new(0, -3));
    }

    #[test]
    fn test_blue_star_decays_at_double_rate() {
        let states = run(AwardKind::BlueStar, 6, 1, 2);
        assert_eq!(states[0], AwardState::new(4, 0));
        assert_eq!(states[1], AwardState::new(0, -1));
    }

    #[test]
    fn test_blue_compare_rate_thresholds() {
        assert_eq!(blue_compare_rate(11), QualityRate::Single);
        assert_eq!(blue_compare_rate(10), QualityRate::Double);
        assert_eq!(blue_compare_rate(6), QualityRate::Double);
        assert_eq!(blue_compare_rate(5), QualityRate::Triple);
        assert_eq!(blue_compare_rate(0), QualityRate::Triple);
        assert_eq!(blue_compare_rate(-1), QualityRate::Single);
    }

    #[test]
    fn test_blue_compare_appreciates_then_resets() {
        let states = run(AwardKind::BlueCompare, 20, 1, 2);
        assert_eq!(states[0], AwardState::new(23, 0));
        assert_eq!(states[1], AwardState::new(0, -1));
    }

    #[test]
    fn test_blue_compare_clamps_at_max() {
        let next = next_day(AwardKind::BlueCompare, AwardState::new(49, 3));
        assert_eq!(next, AwardState::new(50, 2));
    }

    #[test]
    fn test_blue_distinction_plus_is_unchanged() {
        let states = run(AwardKind::BlueDistinctionPlus, 80, 1, 5);
        assert!(states.iter().all(|s| *s == AwardState::new(80, 1)));
    }

    #[test]
    fn test_blue_first_gains_two_on_expiry_day() {
        let states = run(AwardKind::BlueFirst, 10, 1, 2);
        assert_eq!(states[0], AwardState::new(11, 0));
        assert_eq!(states[1], AwardState::new(13, -1));
    }

    #[test]
    fn test_blue_first_holds_at_max() {
        let states = run(AwardKind::BlueFirst, 47, 0, 3);
        assert_eq!(states[0].quality, 49);
        assert_eq!(states[1].quality, 50);
        assert_eq!(states[2].quality, 50);
    }

    #[test]
    fn test_countdown_saturates_instead_of_overflowing() {
        let next = next_day(AwardKind::Generic, AwardState::new(0, i32::MIN));
        assert_eq!(next.current_day, i32::MIN);
    }
}
