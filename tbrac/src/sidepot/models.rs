//! Sidepot data models.

use crate::types::{BowlerId, Pins};
use serde::{Deserialize, Serialize};

/// Two bowlers bowling as a doubles team
pub type Pair = (BowlerId, BowlerId);

/// Sidepot competition format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidepotKind {
    HighGame,
    HighSeries,
    MysteryDoubles,
    LoveDoubles,
    Eliminator,
    Sweeper,
}

impl SidepotKind {
    /// Whether entrants bowl in pairs
    pub fn is_doubles(self) -> bool {
        matches!(self, SidepotKind::MysteryDoubles | SidepotKind::LoveDoubles)
    }
}

impl std::fmt::Display for SidepotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SidepotKind::HighGame => write!(f, "high_game"),
            SidepotKind::HighSeries => write!(f, "high_series"),
            SidepotKind::MysteryDoubles => write!(f, "mystery_doubles"),
            SidepotKind::LoveDoubles => write!(f, "love_doubles"),
            SidepotKind::Eliminator => write!(f, "eliminator"),
            SidepotKind::Sweeper => write!(f, "sweeper"),
        }
    }
}

/// Sidepot lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidepotStatus {
    Open,
    InProgress,
    Completed,
}

impl std::fmt::Display for SidepotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SidepotStatus::Open => write!(f, "open"),
            SidepotStatus::InProgress => write!(f, "in_progress"),
            SidepotStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Whether an entrant is still competing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum EntryStatus {
    #[default]
    Active,
    /// Knocked out of an eliminator in `game`
    Eliminated { game: u32 },
}

/// One bowler's entry in a sidepot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidepotEntry {
    pub bowler_id: BowlerId,
    /// Doubles partner, when drawn or chosen
    pub partner_id: Option<BowlerId>,
    /// Game totals in game order
    pub scores: Vec<Pins>,
    pub status: EntryStatus,
}

impl SidepotEntry {
    pub fn new(bowler_id: BowlerId) -> Self {
        Self {
            bowler_id,
            partner_id: None,
            scores: Vec::new(),
            status: EntryStatus::Active,
        }
    }

    pub fn is_eliminated(&self) -> bool {
        matches!(self.status, EntryStatus::Eliminated { .. })
    }

    /// Game in which the entrant was eliminated
    pub fn eliminated_in(&self) -> Option<u32> {
        match self.status {
            EntryStatus::Eliminated { game } => Some(game),
            EntryStatus::Active => None,
        }
    }

    /// Sum of recorded game totals
    pub fn total(&self) -> Pins {
        self.scores.iter().sum()
    }
}

/// Top of a standings table; ties are reported, never broken
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result")]
pub enum Leader {
    Outright { bowler_id: BowlerId, score: Pins },
    Tie { bowler_ids: Vec<BowlerId>, score: Pins },
}

impl Leader {
    /// Winning score
    pub fn score(&self) -> Pins {
        match self {
            Leader::Outright { score, .. } | Leader::Tie { score, .. } => *score,
        }
    }

    /// Outright winner, if there is one
    pub fn winner(&self) -> Option<BowlerId> {
        match self {
            Leader::Outright { bowler_id, .. } => Some(*bowler_id),
            Leader::Tie { .. } => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Leader::Tie { .. })
    }

    /// Every bowler sharing the top score
    pub fn bowler_ids(&self) -> Vec<BowlerId> {
        match self {
            Leader::Outright { bowler_id, .. } => vec![*bowler_id],
            Leader::Tie { bowler_ids, .. } => bowler_ids.clone(),
        }
    }
}

/// High game result for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighGameResult {
    pub game_number: u32,
    pub leader: Leader,
}

/// A doubles team with its combined total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoublesTeam {
    pub bowler_a: BowlerId,
    pub bowler_b: BowlerId,
    pub combined_score: Pins,
}

/// Mystery doubles draw
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairings {
    pub teams: Vec<Pair>,
    /// Odd bowler out; excluded from standings
    pub unpaired: Option<BowlerId>,
}

/// Outcome of one eliminator game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminatorRound {
    pub game_number: u32,
    pub still_in: Vec<BowlerId>,
    pub eliminated: Vec<BowlerId>,
    pub cut_score: Pins,
}

/// Sweeper standings row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweeperStanding {
    pub bowler_id: BowlerId,
    pub total_pins: Pins,
    /// Standard competition rank (1, 2, 2, 4)
    pub position: u32,
}

/// Resolved result of any sidepot format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "result")]
pub enum SidepotOutcome {
    HighGame(Vec<HighGameResult>),
    HighSeries(Leader),
    Doubles(Vec<DoublesTeam>),
    Eliminator(Vec<EliminatorRound>),
    Sweeper(Vec<SweeperStanding>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_accessors() {
        let tie = Leader::Tie {
            bowler_ids: vec![3, 5],
            score: 245,
        };
        assert!(tie.is_tie());
        assert_eq!(tie.winner(), None);
        assert_eq!(tie.bowler_ids(), vec![3, 5]);
        assert_eq!(tie.score(), 245);

        let outright = Leader::Outright {
            bowler_id: 3,
            score: 250,
        };
        assert_eq!(outright.winner(), Some(3));
    }

    #[test]
    fn test_entry_elimination() {
        let mut entry = SidepotEntry::new(1);
        assert!(!entry.is_eliminated());
        entry.status = EntryStatus::Eliminated { game: 2 };
        assert_eq!(entry.eliminated_in(), Some(2));
    }

    #[test]
    fn test_entry_total() {
        let mut entry = SidepotEntry::new(1);
        entry.scores = vec![200, 180, 210];
        assert_eq!(entry.total(), 590);
    }

    #[test]
    fn test_kind_wire_names() {
        let json = serde_json::to_string(&SidepotKind::MysteryDoubles).unwrap();
        assert_eq!(json, "\"mystery_doubles\"");
        assert!(SidepotKind::LoveDoubles.is_doubles());
        assert!(!SidepotKind::Sweeper.is_doubles());
    }
}
