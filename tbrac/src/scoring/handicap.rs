//! Handicap calculation.

use super::models::Bowler;
use crate::types::Pins;
use serde::{Deserialize, Serialize};

/// Default handicap base (pins)
pub const DEFAULT_HANDICAP_BASE: Pins = 220;

/// Default handicap percentage (90%)
pub const DEFAULT_HANDICAP_PERCENTAGE: f64 = 0.9;

// Absorbs binary representation error in `percentage` so that e.g. 10 * 0.7 floors to 7.
const FLOOR_EPSILON: f64 = 1e-9;

/// Handicap configuration for an event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandicapConfig {
    /// Average at or above which the handicap is zero
    pub base: Pins,
    /// Fraction of the gap to `base` awarded (0.9 = 90%)
    pub percentage: f64,
    /// Optional cap on the handicap
    pub max_handicap: Option<Pins>,
}

impl HandicapConfig {
    /// Create a configuration without a cap
    pub fn new(base: Pins, percentage: f64) -> Self {
        Self {
            base,
            percentage,
            max_handicap: None,
        }
    }

    /// Cap the handicap at `max`
    pub fn with_max(mut self, max: Pins) -> Self {
        self.max_handicap = Some(max);
        self
    }
}

impl Default for HandicapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HANDICAP_BASE, DEFAULT_HANDICAP_PERCENTAGE)
    }
}

/// Calculate the handicap for a rolling average
///
/// Formula: `floor((base - average) * percentage)`, clamped to
/// `max_handicap` when set and never below zero.
///
/// # Arguments
///
/// * `average` - Bowler's rolling average
/// * `config` - Event handicap configuration
///
/// # Returns
///
/// * `Pins` - Handicap in pins
pub fn calculate_handicap(average: Pins, config: &HandicapConfig) -> Pins {
    if average >= config.base {
        return 0;
    }

    let gap = (i64::from(config.base) - i64::from(average)) as f64;
    let mut handicap = (gap * config.percentage + FLOOR_EPSILON).floor() as Pins;

    if let Some(max) = config.max_handicap {
        handicap = handicap.min(max);
    }

    handicap.max(0)
}

/// Total score with handicap
pub fn calculate_total_score(pins: Pins, handicap: Pins) -> Pins {
    pins + handicap
}

/// Compute and attach handicaps for every bowler
pub fn apply_handicap_to_all(bowlers: &[Bowler], config: &HandicapConfig) -> Vec<Bowler> {
    bowlers.iter().map(|b| b.apply_handicap(config)).collect()
}

impl Bowler {
    /// Return a copy with the handicap computed from the bowler's average
    #[must_use]
    pub fn apply_handicap(&self, config: &HandicapConfig) -> Bowler {
        self.clone()
            .with_handicap(calculate_handicap(self.average, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_at_base() {
        assert_eq!(calculate_handicap(220, &HandicapConfig::default()), 0);
    }

    #[test]
    fn test_zero_above_base() {
        assert_eq!(calculate_handicap(245, &HandicapConfig::default()), 0);
    }

    #[test]
    fn test_ninety_percent_of_gap() {
        // (220 - 180) * 0.9 = 36
        assert_eq!(calculate_handicap(180, &HandicapConfig::default()), 36);
    }

    #[test]
    fn test_floors_fractional_handicap() {
        // (220 - 175) * 0.9 = 40.5
        assert_eq!(calculate_handicap(175, &HandicapConfig::default()), 40);
    }

    #[test]
    fn test_max_handicap_caps() {
        let config = HandicapConfig::new(220, 0.9).with_max(50);
        // (220 - 100) * 0.9 = 108, capped to 50
        assert_eq!(calculate_handicap(100, &config), 50);
    }

    #[test]
    fn test_representation_error_absorbed() {
        let config = HandicapConfig::new(210, 0.7);
        // 10 * 0.7 must be 7, not 6
        assert_eq!(calculate_handicap(200, &config), 7);
    }

    #[test]
    fn test_negative_percentage_floors_at_zero() {
        let config = HandicapConfig::new(220, -0.5);
        assert_eq!(calculate_handicap(150, &config), 0);
    }

    #[test]
    fn test_extreme_average_does_not_overflow() {
        let config = HandicapConfig::new(220, 0.9).with_max(100);
        assert_eq!(calculate_handicap(i32::MIN, &config), 100);

        let config = HandicapConfig::new(i32::MAX, 1.0);
        assert_eq!(calculate_handicap(i32::MIN, &config), i32::MAX);
    }

    #[test]
    fn test_apply_handicap_to_all() {
        let bowlers = vec![Bowler::new(1, "A", 180), Bowler::new(2, "B", 230)];
        let with = apply_handicap_to_all(&bowlers, &HandicapConfig::default());
        assert_eq!(with[0].handicap, Some(36));
        assert_eq!(with[1].handicap, Some(0));
    }

    #[test]
    fn test_total_score() {
        assert_eq!(calculate_total_score(180, 36), 216);
    }
}
