//! Bracket error types.

use super::models::MatchId;
use crate::error::ErrorCategory;
use crate::types::{BowlerId, Pins};
use thiserror::Error;

/// Bracket errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("Insufficient entrants: need {needed}, have {current}")]
    InsufficientEntrants { needed: usize, current: usize },

    #[error("Too many entrants: bracket holds {capacity}, have {current}")]
    TooManyEntrants { capacity: usize, current: usize },

    #[error("Bowler {0} entered more than once")]
    DuplicateEntrant(BowlerId),

    #[error("Unsupported bracket size: {0} (expected 4, 8, 12, 16, 32 or 64)")]
    UnsupportedSize(usize),

    #[error("Match not found: {0}")]
    UnknownMatch(MatchId),

    #[error("Bowler {bowler_id} is not in match {match_id}")]
    NotInMatch { match_id: MatchId, bowler_id: BowlerId },

    #[error("Match {match_id} already decided for bowler {winner}")]
    AlreadyDecided { match_id: MatchId, winner: BowlerId },

    #[error("Match {0} is not ready (missing bowlers)")]
    NotReady(MatchId),

    #[error("Match {0} has no scores recorded")]
    MissingScores(MatchId),

    #[error("Match {match_id} is tied at {score}; re-enter a tie-broken score")]
    Tie { match_id: MatchId, score: Pins },

    #[error("Invalid score {score} for match {match_id}")]
    InvalidScore { match_id: MatchId, score: Pins },

    #[error("Match {match_id} slot already holds bowler {bowler_id}")]
    SlotTaken { match_id: MatchId, bowler_id: BowlerId },
}

impl BracketError {
    /// Error category for callers that branch on the kind of failure
    pub fn category(&self) -> ErrorCategory {
        match self {
            BracketError::Tie { .. } => ErrorCategory::Tie,
            BracketError::InvalidScore { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Structural,
        }
    }
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;
