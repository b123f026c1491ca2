//! Scoring module: handicaps, score validation and per-bowler statistics.
//!
//! This is the leaf of the crate; everything else reads the [`GameScore`]
//! totals produced here.
//!
//! - Handicap from a rolling average (`floor((base - average) * percentage)`)
//! - Validation of recorded scores against the pins + handicap invariant
//! - Games played, average, high and low game per bowler
//! - Weighted merge of a bowler's average with newly bowled games
//!
//! ## Example
//!
//! ```
//! use tbrac::scoring::{GameScore, HandicapConfig, calculate_handicap, validate_game_score};
//!
//! let handicap = calculate_handicap(180, &HandicapConfig::default());
//! assert_eq!(handicap, 36);
//!
//! let score = GameScore::new(1, 10, 1, 190, handicap);
//! assert_eq!(score.total, 226);
//! assert!(validate_game_score(&score).is_empty());
//! ```

pub mod errors;
pub mod handicap;
pub mod models;
pub mod stats;
pub mod validation;

pub use errors::{ScoringError, ScoringResult};
pub use handicap::{
    DEFAULT_HANDICAP_BASE, DEFAULT_HANDICAP_PERCENTAGE, HandicapConfig, apply_handicap_to_all,
    calculate_handicap, calculate_total_score,
};
pub use models::{Bowler, BowlerStats, GameScore, ScoringType};
pub use stats::{calculate_all_bowler_stats, calculate_bowler_stats, recalculate_average};
pub use validation::{ScoreViolation, ensure_valid, is_valid_score, validate_game_score};
