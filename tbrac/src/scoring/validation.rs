//! Score validation.

use super::errors::{ScoringError, ScoringResult};
use super::models::GameScore;
use crate::types::{PERFECT_GAME, Pins};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single violated score invariant
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ScoreViolation {
    #[error("Invalid pins knocked: {0} (must be 0-300)")]
    PinsOutOfRange(Pins),

    #[error("Invalid handicap: {0} (must be >= 0)")]
    NegativeHandicap(Pins),

    #[error("Invalid game number: {0} (must be >= 1)")]
    InvalidGameNumber(u32),

    #[error("Total score mismatch: got {got}, expected {expected}")]
    TotalMismatch { got: Pins, expected: i64 },
}

/// Whether `pins` is a legal single-game pin count
pub fn is_valid_score(pins: Pins) -> bool {
    (0..=PERFECT_GAME).contains(&pins)
}

/// Check a recorded score against every score invariant
///
/// # Returns
///
/// * `Vec<ScoreViolation>` - Violations found; empty when the score is valid
pub fn validate_game_score(score: &GameScore) -> Vec<ScoreViolation> {
    let mut violations = Vec::new();

    if !is_valid_score(score.pins) {
        violations.push(ScoreViolation::PinsOutOfRange(score.pins));
    }

    if score.handicap < 0 {
        violations.push(ScoreViolation::NegativeHandicap(score.handicap));
    }

    if score.game_number < 1 {
        violations.push(ScoreViolation::InvalidGameNumber(score.game_number));
    }

    let expected = i64::from(score.pins) + i64::from(score.handicap);
    if i64::from(score.total) != expected {
        violations.push(ScoreViolation::TotalMismatch {
            got: score.total,
            expected,
        });
    }

    violations
}

/// Reject a score that violates any invariant
///
/// # Errors
///
/// * `ScoringError::Invalid` - Carries every violation found
pub fn ensure_valid(score: &GameScore) -> ScoringResult<()> {
    let violations = validate_game_score(score);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ScoringError::Invalid(violations))
    }
}
