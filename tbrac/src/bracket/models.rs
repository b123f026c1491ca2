//! Bracket data models.

use super::errors::BracketError;
use crate::types::{BowlerId, Pins};
use serde::{Deserialize, Serialize};

/// Match ID type (sequential within a bracket, starting at 0)
pub type MatchId = u32;

/// Standard bracket sizes.
///
/// Twelve is not a power of two; it is played on a 16-slot tree with byes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BracketSize {
    Four,
    Eight,
    Twelve,
    Sixteen,
    ThirtyTwo,
    SixtyFour,
}

impl BracketSize {
    /// Every standard size, smallest first
    pub const ALL: [BracketSize; 6] = [
        BracketSize::Four,
        BracketSize::Eight,
        BracketSize::Twelve,
        BracketSize::Sixteen,
        BracketSize::ThirtyTwo,
        BracketSize::SixtyFour,
    ];

    /// Requested number of entrants
    pub fn entrants(self) -> usize {
        match self {
            BracketSize::Four => 4,
            BracketSize::Eight => 8,
            BracketSize::Twelve => 12,
            BracketSize::Sixteen => 16,
            BracketSize::ThirtyTwo => 32,
            BracketSize::SixtyFour => 64,
        }
    }

    /// Number of slots in the tree (next power of two)
    pub fn effective_size(self) -> usize {
        effective_size(self.entrants())
    }

    /// Number of rounds to a champion
    pub fn rounds(self) -> u32 {
        rounds_needed(self.entrants())
    }
}

impl TryFrom<usize> for BracketSize {
    type Error = BracketError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        BracketSize::ALL
            .into_iter()
            .find(|size| size.entrants() == value)
            .ok_or(BracketError::UnsupportedSize(value))
    }
}

impl From<BracketSize> for usize {
    fn from(size: BracketSize) -> Self {
        size.entrants()
    }
}

impl std::fmt::Display for BracketSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entrants())
    }
}

/// Next power of two at or above the requested size
pub fn effective_size(requested: usize) -> usize {
    requested.max(1).next_power_of_two()
}

/// Rounds needed for a requested size: `ceil(log2(requested))`
pub fn rounds_needed(requested: usize) -> u32 {
    effective_size(requested).trailing_zeros()
}

/// Byes needed to fill the tree for `entrants` bowlers
pub fn bye_count(entrants: usize, requested: usize) -> usize {
    effective_size(requested).saturating_sub(entrants)
}

/// One side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Waiting for the winner of an earlier match
    Empty,
    /// No opponent will ever arrive
    Bye,
    Occupied(BowlerId),
}

impl Slot {
    /// Bowler in this slot, if any
    pub fn bowler(&self) -> Option<BowlerId> {
        match self {
            Slot::Occupied(id) => Some(*id),
            Slot::Empty | Slot::Bye => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// Bracket lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketStatus {
    /// Drawn, no results yet
    Open,
    InProgress,
    /// Final decided
    Completed,
}

impl std::fmt::Display for BracketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketStatus::Open => write!(f, "open"),
            BracketStatus::InProgress => write!(f, "in_progress"),
            BracketStatus::Completed => write!(f, "completed"),
        }
    }
}

/// How entrants are ordered before they are laid into the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingMethod {
    #[default]
    Random,
    /// Highest average first
    ByAverage,
    /// Highest handicap first
    ByHandicap,
}

/// A single head-to-head match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: MatchId,
    /// Round number (1-indexed)
    pub round: u32,
    /// Position within the round (0-indexed)
    pub position: u32,
    pub slot_a: Slot,
    pub slot_b: Slot,
    pub score_a: Option<Pins>,
    pub score_b: Option<Pins>,
    pub winner: Option<BowlerId>,
    /// Match the winner moves on to; `None` for the final
    pub next_match: Option<MatchId>,
}

impl BracketMatch {
    pub(crate) fn pending(id: MatchId, round: u32, position: u32) -> Self {
        Self {
            id,
            round,
            position,
            slot_a: Slot::Empty,
            slot_b: Slot::Empty,
            score_a: None,
            score_b: None,
            winner: None,
            next_match: None,
        }
    }

    /// Exactly one bowler present and the other side a bye
    pub fn is_bye(&self) -> bool {
        matches!(
            (self.slot_a, self.slot_b),
            (Slot::Occupied(_), Slot::Bye) | (Slot::Bye, Slot::Occupied(_))
        )
    }

    /// Both sides are byes; nobody will play this match
    pub fn is_void(&self) -> bool {
        self.slot_a.is_bye() && self.slot_b.is_bye()
    }

    /// Both bowlers present and no result yet
    pub fn is_ready(&self) -> bool {
        self.winner.is_none()
            && matches!((self.slot_a, self.slot_b), (Slot::Occupied(_), Slot::Occupied(_)))
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether `bowler_id` sits in either slot
    pub fn involves(&self, bowler_id: BowlerId) -> bool {
        self.slot_a.bowler() == Some(bowler_id) || self.slot_b.bowler() == Some(bowler_id)
    }

    /// Both bowlers, when the match is a real pairing
    pub fn pairing(&self) -> Option<(BowlerId, BowlerId)> {
        Some((self.slot_a.bowler()?, self.slot_b.bowler()?))
    }

    /// Losing bowler of a decided match (never set for byes)
    pub fn loser(&self) -> Option<BowlerId> {
        let winner = self.winner?;
        let (a, b) = self.pairing()?;
        if a == winner {
            Some(b)
        } else if b == winner {
            Some(a)
        } else {
            None
        }
    }
}

/// A drawn single-elimination bracket.
///
/// Matches are created as one block by [`Bracket::generate`] or
/// [`Bracket::from_order`]; afterwards only results and advancement change
/// them, and every change returns a new `Bracket`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub size: BracketSize,
    pub status: BracketStatus,
    /// Entrants in draw order
    pub entrants: Vec<BowlerId>,
    /// All matches, round by round, positions ascending
    pub matches: Vec<BracketMatch>,
}
