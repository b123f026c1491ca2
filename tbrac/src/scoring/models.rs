//! Scoring data models.

use crate::types::{BowlerId, EventId, Pins};
use serde::{Deserialize, Serialize};

/// A participant with a rolling average
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bowler {
    pub id: BowlerId,
    pub name: String,
    /// Rolling average in pins
    pub average: Pins,
    /// Handicap derived from `average` for a given event configuration
    pub handicap: Option<Pins>,
}

impl Bowler {
    /// Create a bowler without a computed handicap
    pub fn new(id: BowlerId, name: impl Into<String>, average: Pins) -> Self {
        Self {
            id,
            name: name.into(),
            average,
            handicap: None,
        }
    }

    /// Return a copy carrying the given handicap
    pub fn with_handicap(mut self, handicap: Pins) -> Self {
        self.handicap = Some(handicap);
        self
    }
}

/// One recorded game for one bowler in one event.
///
/// `total` is always `pins + handicap` for scores built through [`GameScore::new`],
/// [`GameScore::with_pins`] or [`GameScore::with_handicap`]. Records loaded from
/// elsewhere should go through [`crate::scoring::validate_game_score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub bowler_id: BowlerId,
    pub event_id: EventId,
    /// Game number within the event (1-indexed)
    pub game_number: u32,
    /// Raw pins knocked down
    pub pins: Pins,
    pub handicap: Pins,
    /// `pins + handicap`
    pub total: Pins,
}

impl GameScore {
    /// Create a game score, computing the total
    pub fn new(
        bowler_id: BowlerId,
        event_id: EventId,
        game_number: u32,
        pins: Pins,
        handicap: Pins,
    ) -> Self {
        Self {
            bowler_id,
            event_id,
            game_number,
            pins,
            handicap,
            total: pins + handicap,
        }
    }

    /// Return a copy with new raw pins and a recomputed total
    #[must_use]
    pub fn with_pins(&self, pins: Pins) -> Self {
        Self::new(
            self.bowler_id,
            self.event_id,
            self.game_number,
            pins,
            self.handicap,
        )
    }

    /// Return a copy with a new handicap and a recomputed total
    #[must_use]
    pub fn with_handicap(&self, handicap: Pins) -> Self {
        Self::new(
            self.bowler_id,
            self.event_id,
            self.game_number,
            self.pins,
            handicap,
        )
    }
}

/// Whether a competition counts raw pins or handicap totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringType {
    Scratch,
    #[default]
    Handicap,
}

impl ScoringType {
    /// View a score under this scoring type.
    ///
    /// Scratch strips the handicap so that `total == pins`; handicap leaves the
    /// score as recorded.
    pub fn apply(self, score: &GameScore) -> GameScore {
        match self {
            ScoringType::Scratch => score.with_handicap(0),
            ScoringType::Handicap => *score,
        }
    }
}

impl std::fmt::Display for ScoringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringType::Scratch => write!(f, "scratch"),
            ScoringType::Handicap => write!(f, "handicap"),
        }
    }
}

/// Aggregate statistics for one bowler.
///
/// All pin figures are raw pins, never handicap totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlerStats {
    pub bowler_id: BowlerId,
    pub games_played: u32,
    pub total_pins: Pins,
    pub average: Pins,
    pub high_game: Pins,
    pub low_game: Pins,
    /// Pins across every game in the set
    pub high_series: Pins,
}

impl BowlerStats {
    /// Stats for a bowler with no games
    pub fn empty(bowler_id: BowlerId) -> Self {
        Self {
            bowler_id,
            games_played: 0,
            total_pins: 0,
            average: 0,
            high_game: 0,
            low_game: 0,
            high_series: 0,
        }
    }
}
