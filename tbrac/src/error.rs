//! Crate-wide error type.

use crate::bracket::BracketError;
use crate::config::ConfigError;
use crate::payout::PayoutError;
use crate::scoring::ScoringError;
use crate::sidepot::SidepotError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad kind of failure, shared by every module's error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Bad input value; never auto-corrected
    Validation,
    /// No winner can be determined; the caller must re-enter a tie-broken score
    Tie,
    /// Operation rejected on the shape of the data (unknown match, too few entrants, ...)
    Structural,
    /// Inputs contradict each other; points to a bookkeeping bug upstream
    Consistency,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Validation => write!(f, "validation"),
            ErrorCategory::Tie => write!(f, "tie"),
            ErrorCategory::Structural => write!(f, "structural"),
            ErrorCategory::Consistency => write!(f, "consistency"),
        }
    }
}

/// Any error raised by the crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error(transparent)]
    Bracket(#[from] BracketError),

    #[error(transparent)]
    Sidepot(#[from] SidepotError),

    #[error(transparent)]
    Payout(#[from] PayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Scoring(e) => e.category(),
            Error::Bracket(e) => e.category(),
            Error::Sidepot(e) => e.category(),
            Error::Payout(e) => e.category(),
            Error::Config(_) => ErrorCategory::Validation,
        }
    }
}

/// Result type using the crate-wide error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_passes_through() {
        let err: Error = BracketError::Tie {
            match_id: 1,
            score: 200,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Tie);

        let err: Error = BracketError::UnknownMatch(9).into();
        assert_eq!(err.category(), ErrorCategory::Structural);
    }

    #[test]
    fn test_display_is_transparent() {
        let err: Error = BracketError::UnknownMatch(9).into();
        assert_eq!(err.to_string(), "Match not found: 9");
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorCategory::Consistency).unwrap();
        assert_eq!(json, "\"consistency\"");
    }
}
