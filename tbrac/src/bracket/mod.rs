//! Bracket module: single-elimination trees over any entrant count.
//!
//! - Power-of-two trees padded with byes (12-entrant brackets play on 16 slots)
//! - Random or average/handicap seeding
//! - Winner advancement with automatic bye resolution
//! - Best-effort rematch avoidance against previous pairings
//!
//! Every operation takes a `&Bracket` and returns a new one, so a failed
//! operation never leaves a half-updated tree behind.
//!
//! ## Example
//!
//! ```
//! use tbrac::bracket::{Bracket, BracketSize, BracketStatus};
//!
//! let bracket = Bracket::from_order(&[1, 2, 3, 4], BracketSize::Four).unwrap();
//! let bracket = bracket.record_result(0, 210, 180).unwrap().bracket;
//! let bracket = bracket.record_result(1, 150, 190).unwrap().bracket;
//! let advance = bracket.record_result(2, 201, 199).unwrap();
//!
//! assert!(advance.complete);
//! assert_eq!(advance.bracket.status, BracketStatus::Completed);
//! assert_eq!(advance.bracket.champion(), Some(1));
//! ```

pub mod engine;
pub mod errors;
pub mod models;
pub mod rematch;
pub mod seeding;

pub use engine::{Advance, MIN_ENTRANTS, determine_winner, still_alive};
pub use errors::{BracketError, BracketResult};
pub use models::{
    Bracket, BracketMatch, BracketSize, BracketStatus, MatchId, SeedingMethod, Slot, bye_count,
    effective_size, rounds_needed,
};
pub use rematch::{RematchOutcome, count_collisions, generate_with_history, prior_pairings};
pub use seeding::{seed_bowlers, seeded_ids};
