//! Payout error types.

use crate::error::ErrorCategory;
use crate::types::{BowlerId, Money};
use thiserror::Error;

/// Payout and ledger errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayoutError {
    #[error("Invalid prize pool: {0} (must not be negative)")]
    NegativePool(Money),

    #[error("Payout ratios must not be empty")]
    EmptyRatios,

    #[error("Payout ratio {0} is outside 0..=1")]
    RatioOutOfRange(f64),

    #[error("Payout ratios sum to {0}, more than the whole pool")]
    RatiosExceedPool(f64),

    /// Amount must be positive for transactions, non-negative for fees
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    #[error("Refund allocation ran out of entries with {remaining} bracket(s) still to refund")]
    RefundShortfall { remaining: u32 },

    #[error("Payout for bowler {bowler_id} (place {place}) is already paid")]
    AlreadyPaid { bowler_id: BowlerId, place: u32 },
}

impl PayoutError {
    /// Error category for callers that branch on the kind of failure
    pub fn category(&self) -> ErrorCategory {
        match self {
            PayoutError::RefundShortfall { .. } => ErrorCategory::Consistency,
            PayoutError::AlreadyPaid { .. } => ErrorCategory::Structural,
            _ => ErrorCategory::Validation,
        }
    }
}

/// Result type for payout operations
pub type PayoutResult<T> = Result<T, PayoutError>;
