//! Identifier and unit aliases shared by every module.

/// Bowler ID type (opaque key assigned by the record store)
pub type BowlerId = i64;

/// Event ID type
pub type EventId = i64;

/// Bracket ID type
pub type BracketId = i64;

/// Sidepot ID type
pub type SidepotId = i64;

/// Pin counts, handicaps and handicap totals.
pub type Pins = i32;

/// Money in the smallest currency unit (whole dollars for most events).
pub type Money = i64;

/// Highest legal pin count for a single game.
pub const PERFECT_GAME: Pins = 300;
