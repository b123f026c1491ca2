//! Sidepot formats behind a single dispatch trait.

use super::doubles::{doubles_standings, love_doubles_standings};
use super::eliminator::run_eliminator;
use super::errors::{SidepotError, SidepotResult};
use super::high_game::{all_high_game_winners, high_series_winner};
use super::models::{Pair, Pairings, SidepotKind, SidepotOutcome};
use super::sweeper::sweeper_standings;
use crate::config::DEFAULT_ELIMINATION_PERCENTAGE;
use crate::scoring::GameScore;
use crate::types::BowlerId;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// Resolve a sidepot format over a score set
#[enum_dispatch]
pub trait Resolve {
    fn kind(&self) -> SidepotKind;

    /// Compute the standings for `entrants` from `scores`
    ///
    /// Scores are expected to be filtered to the competition already.
    fn resolve(&self, entrants: &[BowlerId], scores: &[GameScore]) -> SidepotResult<SidepotOutcome>;
}

/// Highest single game, per game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighGame {
    pub games: u32,
}

/// Highest total across every game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighSeries {}

/// Randomly drawn doubles partners
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MysteryDoubles {
    pub pairings: Pairings,
}

/// Partners chosen by the bowlers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoveDoubles {
    pub teams: Vec<Pair>,
}

/// Field cut each game until the last game is bowled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eliminator {
    pub games: u32,
    pub elimination_percentage: f64,
}

impl Eliminator {
    /// Eliminator cutting the bottom half each game
    pub fn new(games: u32) -> Self {
        Self {
            games,
            elimination_percentage: DEFAULT_ELIMINATION_PERCENTAGE,
        }
    }
}

/// Total pins, standard competition ranking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sweeper {}

impl Resolve for HighGame {
    fn kind(&self) -> SidepotKind {
        SidepotKind::HighGame
    }

    fn resolve(&self, _entrants: &[BowlerId], scores: &[GameScore]) -> SidepotResult<SidepotOutcome> {
        all_high_game_winners(scores, self.games).map(SidepotOutcome::HighGame)
    }
}

impl Resolve for HighSeries {
    fn kind(&self) -> SidepotKind {
        SidepotKind::HighSeries
    }

    fn resolve(&self, _entrants: &[BowlerId], scores: &[GameScore]) -> SidepotResult<SidepotOutcome> {
        high_series_winner(scores).map(SidepotOutcome::HighSeries)
    }
}

impl Resolve for MysteryDoubles {
    fn kind(&self) -> SidepotKind {
        SidepotKind::MysteryDoubles
    }

    fn resolve(&self, _entrants: &[BowlerId], scores: &[GameScore]) -> SidepotResult<SidepotOutcome> {
        if self.pairings.teams.is_empty() {
            return Err(SidepotError::PairingsNotDrawn);
        }
        Ok(SidepotOutcome::Doubles(doubles_standings(
            &self.pairings.teams,
            scores,
        )))
    }
}

impl Resolve for LoveDoubles {
    fn kind(&self) -> SidepotKind {
        SidepotKind::LoveDoubles
    }

    fn resolve(&self, _entrants: &[BowlerId], scores: &[GameScore]) -> SidepotResult<SidepotOutcome> {
        love_doubles_standings(&self.teams, scores).map(SidepotOutcome::Doubles)
    }
}

impl Resolve for Eliminator {
    fn kind(&self) -> SidepotKind {
        SidepotKind::Eliminator
    }

    fn resolve(&self, entrants: &[BowlerId], scores: &[GameScore]) -> SidepotResult<SidepotOutcome> {
        run_eliminator(entrants, scores, self.games, self.elimination_percentage)
            .map(SidepotOutcome::Eliminator)
    }
}

impl Resolve for Sweeper {
    fn kind(&self) -> SidepotKind {
        SidepotKind::Sweeper
    }

    fn resolve(&self, _entrants: &[BowlerId], scores: &[GameScore]) -> SidepotResult<SidepotOutcome> {
        Ok(SidepotOutcome::Sweeper(sweeper_standings(scores)))
    }
}

/// Any sidepot format
#[enum_dispatch(Resolve)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Competition {
    HighGame(HighGame),
    HighSeries(HighSeries),
    MysteryDoubles(MysteryDoubles),
    LoveDoubles(LoveDoubles),
    Eliminator(Eliminator),
    Sweeper(Sweeper),
}
