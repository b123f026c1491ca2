//! Sidepot record: sign-up, play and completion.

use super::doubles::{mystery_pairings, validate_teams};
use super::errors::{SidepotError, SidepotResult};
use super::formats::{Competition, LoveDoubles, MysteryDoubles, Resolve};
use super::models::{
    EliminatorRound, EntryStatus, Pair, SidepotEntry, SidepotKind, SidepotOutcome, SidepotStatus,
};
use crate::scoring::{GameScore, ScoringType};
use crate::shuffle::Shuffler;
use crate::types::{BowlerId, EventId, Money, SidepotId};
use log::info;
use serde::{Deserialize, Serialize};

/// Prize pool of a sidepot: every entry fee goes back out
pub fn sidepot_prize_pool(entries: usize, entry_fee: Money) -> Money {
    entries as Money * entry_fee
}

/// A side competition within an event.
///
/// Every operation returns a new `Sidepot`; entries can only be added or
/// withdrawn while the sidepot is open and nothing changes once it is completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sidepot {
    pub id: SidepotId,
    pub event_id: EventId,
    pub name: String,
    pub competition: Competition,
    pub entry_fee: Money,
    pub scoring_type: ScoringType,
    pub status: SidepotStatus,
    pub entries: Vec<SidepotEntry>,
}

impl Sidepot {
    /// Create an open sidepot
    ///
    /// # Errors
    ///
    /// * `SidepotError::InvalidEntryFee` - Negative entry fee
    pub fn new(
        id: SidepotId,
        event_id: EventId,
        name: impl Into<String>,
        competition: Competition,
        entry_fee: Money,
        scoring_type: ScoringType,
    ) -> SidepotResult<Self> {
        if entry_fee < 0 {
            return Err(SidepotError::InvalidEntryFee(entry_fee));
        }

        Ok(Self {
            id,
            event_id,
            name: name.into(),
            competition,
            entry_fee,
            scoring_type,
            status: SidepotStatus::Open,
            entries: Vec::new(),
        })
    }

    pub fn kind(&self) -> SidepotKind {
        self.competition.kind()
    }

    /// Entered bowlers, in sign-up order
    pub fn entrants(&self) -> Vec<BowlerId> {
        self.entries.iter().map(|e| e.bowler_id).collect()
    }

    pub fn entry(&self, bowler_id: BowlerId) -> Option<&SidepotEntry> {
        self.entries.iter().find(|e| e.bowler_id == bowler_id)
    }

    /// Bowlers not eliminated
    pub fn still_in(&self) -> Vec<BowlerId> {
        self.entries
            .iter()
            .filter(|e| !e.is_eliminated())
            .map(|e| e.bowler_id)
            .collect()
    }

    /// Teams named on the entries, each pairing once, in sign-up order
    ///
    /// A partner does not need an entry of their own; a team may sign up
    /// under one bowler.
    pub fn entry_teams(&self) -> Vec<Pair> {
        let mut teams: Vec<Pair> = Vec::new();
        for entry in &self.entries {
            let Some(partner) = entry.partner_id else {
                continue;
            };
            if !teams.contains(&(partner, entry.bowler_id)) {
                teams.push((entry.bowler_id, partner));
            }
        }
        teams
    }

    /// Whether a bowler's scores count here: entered, or named as a partner
    fn counts_scores_of(&self, bowler_id: BowlerId) -> bool {
        self.entries
            .iter()
            .any(|e| e.bowler_id == bowler_id || e.partner_id == Some(bowler_id))
    }

    pub fn prize_pool(&self) -> Money {
        sidepot_prize_pool(self.entries.len(), self.entry_fee)
    }

    fn ensure_open(&self) -> SidepotResult<()> {
        match self.status {
            SidepotStatus::Open => Ok(()),
            status => Err(SidepotError::NotOpen(status)),
        }
    }

    fn ensure_not_completed(&self) -> SidepotResult<()> {
        if self.status == SidepotStatus::Completed {
            Err(SidepotError::Completed)
        } else {
            Ok(())
        }
    }

    fn ensure_kind(&self, expected: SidepotKind) -> SidepotResult<()> {
        let got = self.kind();
        if got == expected {
            Ok(())
        } else {
            Err(SidepotError::WrongKind { expected, got })
        }
    }

    fn entry_index(&self, bowler_id: BowlerId) -> SidepotResult<usize> {
        self.entries
            .iter()
            .position(|e| e.bowler_id == bowler_id)
            .ok_or(SidepotError::NotEntered(bowler_id))
    }

    /// Sign a bowler up, optionally with a chosen partner
    ///
    /// # Errors
    ///
    /// * `SidepotError::NotOpen` - Sidepot has started or finished
    /// * `SidepotError::AlreadyEntered` - Bowler already signed up
    /// * `SidepotError::SelfPairing` - Bowler named as their own partner
    /// * `SidepotError::DuplicatePartner` - Partner already on another team, or
    ///   the pairing contradicts one named earlier
    pub fn add_entry(&self, bowler_id: BowlerId, partner_id: Option<BowlerId>) -> SidepotResult<Self> {
        self.ensure_open()?;
        if self.entry(bowler_id).is_some() {
            return Err(SidepotError::AlreadyEntered(bowler_id));
        }
        if partner_id == Some(bowler_id) {
            return Err(SidepotError::SelfPairing(bowler_id));
        }

        let mut sidepot = self.clone();
        sidepot.entries.push(SidepotEntry {
            partner_id,
            ..SidepotEntry::new(bowler_id)
        });
        if partner_id.is_some() {
            validate_teams(&sidepot.entry_teams())?;
        }
        Ok(sidepot)
    }

    /// Withdraw a bowler before the sidepot starts
    pub fn remove_entry(&self, bowler_id: BowlerId) -> SidepotResult<Self> {
        self.ensure_open()?;
        let idx = self.entry_index(bowler_id)?;

        let mut sidepot = self.clone();
        sidepot.entries.remove(idx);
        Ok(sidepot)
    }

    /// Close sign-up
    pub fn begin(&self) -> SidepotResult<Self> {
        self.ensure_open()?;
        let mut sidepot = self.clone();
        sidepot.status = SidepotStatus::InProgress;
        Ok(sidepot)
    }

    /// Draw mystery doubles partners and start the sidepot
    ///
    /// Partners are written to both entries; an odd bowler out keeps no
    /// partner. Drawing again replaces the previous draw.
    ///
    /// # Errors
    ///
    /// * `SidepotError::WrongKind` - Not a mystery doubles sidepot
    /// * `SidepotError::InsufficientEntrants` - Fewer than two entries
    /// * `SidepotError::Completed` - Sidepot already completed
    pub fn draw_mystery_pairs(&self, shuffler: &mut Shuffler) -> SidepotResult<Self> {
        self.ensure_kind(SidepotKind::MysteryDoubles)?;
        self.ensure_not_completed()?;

        let pairings = mystery_pairings(&self.entrants(), shuffler)?;

        let mut sidepot = self.clone();
        for entry in &mut sidepot.entries {
            entry.partner_id = pairings.teams.iter().find_map(|&(a, b)| {
                if a == entry.bowler_id {
                    Some(b)
                } else if b == entry.bowler_id {
                    Some(a)
                } else {
                    None
                }
            });
        }
        sidepot.competition = Competition::MysteryDoubles(MysteryDoubles { pairings });
        sidepot.status = SidepotStatus::InProgress;
        Ok(sidepot)
    }

    /// Mark one eliminator entrant out as of `game`
    pub fn eliminate(&self, bowler_id: BowlerId, game: u32) -> SidepotResult<Self> {
        self.ensure_kind(SidepotKind::Eliminator)?;
        self.ensure_not_completed()?;
        let idx = self.entry_index(bowler_id)?;

        let mut sidepot = self.clone();
        sidepot.entries[idx].status = EntryStatus::Eliminated { game };
        Ok(sidepot)
    }

    /// Record every elimination from a run of eliminator rounds
    ///
    /// Bowlers already marked keep the game they first fell in.
    pub fn apply_eliminator(&self, rounds: &[EliminatorRound]) -> SidepotResult<Self> {
        self.ensure_kind(SidepotKind::Eliminator)?;
        self.ensure_not_completed()?;

        let mut sidepot = self.clone();
        for round in rounds {
            for &bowler_id in &round.eliminated {
                let idx = sidepot.entry_index(bowler_id)?;
                let entry = &mut sidepot.entries[idx];
                if !entry.is_eliminated() {
                    entry.status = EntryStatus::Eliminated {
                        game: round.game_number,
                    };
                }
            }
        }
        Ok(sidepot)
    }

    /// Scores that count for this sidepot, viewed under its scoring type
    pub fn relevant_scores(&self, scores: &[GameScore]) -> Vec<GameScore> {
        let mut relevant: Vec<GameScore> = scores
            .iter()
            .filter(|s| s.event_id == self.event_id && self.counts_scores_of(s.bowler_id))
            .map(|s| self.scoring_type.apply(s))
            .collect();
        relevant.sort_by_key(|s| s.game_number);
        relevant
    }

    /// Copy each entrant's game totals onto their entry, in game order
    pub fn sync_scores(&self, scores: &[GameScore]) -> SidepotResult<Self> {
        self.ensure_not_completed()?;
        let relevant = self.relevant_scores(scores);

        let mut sidepot = self.clone();
        for entry in &mut sidepot.entries {
            entry.scores = relevant
                .iter()
                .filter(|s| s.bowler_id == entry.bowler_id)
                .map(|s| s.total)
                .collect();
        }
        Ok(sidepot)
    }

    /// Resolve the competition from the event's scores
    ///
    /// Scores from other events or from bowlers neither entered nor named as
    /// a partner are ignored, and scratch sidepots strip handicaps first. Love
    /// doubles without configured teams use the partners named on the entries.
    pub fn resolve(&self, scores: &[GameScore]) -> SidepotResult<SidepotOutcome> {
        let relevant = self.relevant_scores(scores);
        match &self.competition {
            Competition::LoveDoubles(love) if love.teams.is_empty() => LoveDoubles {
                teams: self.entry_teams(),
            }
            .resolve(&self.entrants(), &relevant),
            competition => competition.resolve(&self.entrants(), &relevant),
        }
    }

    /// Finish the sidepot; no further changes are accepted
    pub fn complete(&self) -> SidepotResult<Self> {
        self.ensure_not_completed()?;
        let mut sidepot = self.clone();
        sidepot.status = SidepotStatus::Completed;
        info!(
            "Sidepot {} ({}) completed with {} entries, pool {}",
            self.id,
            self.kind(),
            self.entries.len(),
            self.prize_pool()
        );
        Ok(sidepot)
    }
}
