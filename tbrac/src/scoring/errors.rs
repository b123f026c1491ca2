//! Scoring error types.

use super::validation::ScoreViolation;
use crate::error::ErrorCategory;
use thiserror::Error;

/// Scoring errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// One or more score invariants failed
    #[error("Invalid game score: {}", join_violations(.0))]
    Invalid(Vec<ScoreViolation>),
}

impl ScoringError {
    /// Error category for callers that branch on the kind of failure
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

fn join_violations(violations: &[ScoreViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for scoring operations
pub type ScoringResult<T> = Result<T, ScoringError>;
