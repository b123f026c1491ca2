//! Sidepot error types.

use super::models::{SidepotKind, SidepotStatus};
use crate::error::ErrorCategory;
use crate::types::{BowlerId, Money};
use thiserror::Error;

/// Sidepot errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SidepotError {
    #[error("No scores found for game {0}")]
    NoScores(u32),

    #[error("No scores recorded")]
    EmptyScoreSet,

    #[error("Insufficient entrants: need {needed}, have {current}")]
    InsufficientEntrants { needed: usize, current: usize },

    #[error("Invalid elimination percentage: {0} (must be between 0 and 1)")]
    InvalidPercentage(f64),

    #[error("Invalid entry fee: {0}")]
    InvalidEntryFee(Money),

    #[error("Sidepot is {0}, not open for entries")]
    NotOpen(SidepotStatus),

    #[error("Sidepot is already completed")]
    Completed,

    #[error("Bowler {0} already entered")]
    AlreadyEntered(BowlerId),

    #[error("Bowler {0} is not entered")]
    NotEntered(BowlerId),

    #[error("Sidepot is {got}, expected {expected}")]
    WrongKind {
        expected: SidepotKind,
        got: SidepotKind,
    },

    #[error("Bowler {0} cannot partner themselves")]
    SelfPairing(BowlerId),

    #[error("Bowler {0} is on more than one team")]
    DuplicatePartner(BowlerId),

    #[error("Mystery doubles pairings have not been drawn")]
    PairingsNotDrawn,
}

impl SidepotError {
    /// Error category for callers that branch on the kind of failure
    pub fn category(&self) -> ErrorCategory {
        match self {
            SidepotError::InvalidPercentage(_)
            | SidepotError::InvalidEntryFee(_)
            | SidepotError::SelfPairing(_)
            | SidepotError::DuplicatePartner(_) => ErrorCategory::Validation,
            _ => ErrorCategory::Structural,
        }
    }
}

/// Result type for sidepot operations
pub type SidepotResult<T> = Result<T, SidepotError>;
