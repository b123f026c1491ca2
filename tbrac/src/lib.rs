//! # tbrac
//!
//! Bracket, sidepot, handicap and payout calculations for bowling events.
//!
//! Everything in this crate is a pure computation over explicit inputs: each
//! operation takes records by reference and returns new records or an error,
//! never a half-updated value. Persistence, authorization and presentation
//! live outside the crate and consume these types through serde.
//!
//! ## Core Modules
//!
//! Data flows one way through the modules:
//!
//! - [`scoring`]: Handicaps, score validation and per-bowler statistics
//! - [`bracket`]: Single-elimination trees, seeding, advancement and rematch avoidance
//! - [`sidepot`]: High game, high series, doubles, eliminator and sweeper
//! - [`payout`]: Payout tiers, refunds, event financials and the money ledger
//!
//! Shuffling goes through [`Shuffler`], the only source of randomness; seed it
//! for reproducible draws.
//!
//! ## Example
//!
//! ```
//! use tbrac::{Bracket, BracketSize, Shuffler};
//!
//! let mut shuffler = Shuffler::seeded(7);
//! let bracket = Bracket::start(&[1, 2, 3, 4, 5, 6], BracketSize::Eight, &mut shuffler).unwrap();
//!
//! assert_eq!(bracket.matches.len(), 7);
//! assert_eq!(bracket.still_alive().len(), 6);
//! ```

/// Bracket construction and advancement.
pub mod bracket;
pub use bracket::{Bracket, BracketError, BracketMatch, BracketSize, BracketStatus, SeedingMethod, Slot};

/// Core configuration loaded from the environment.
pub mod config;
pub use config::{ConfigError, CoreConfig};

/// Crate-wide error type.
pub mod error;
pub use error::{Error, ErrorCategory, Result};

/// Payout tiers, refunds and the ledger.
pub mod payout;
pub use payout::{MoneyLedger, PayoutError, PayoutStructure};

/// Handicaps, validation and statistics.
pub mod scoring;
pub use scoring::{Bowler, GameScore, HandicapConfig, ScoringError, ScoringType};

pub mod shuffle;
pub use shuffle::Shuffler;

/// Side competitions.
pub mod sidepot;
pub use sidepot::{Competition, Resolve, Sidepot, SidepotError, SidepotOutcome};

pub mod types;
pub use types::{BowlerId, BracketId, EventId, Money, Pins, SidepotId};
