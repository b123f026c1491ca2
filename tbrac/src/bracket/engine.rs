//! Bracket construction, results and winner advancement.

use super::errors::{BracketError, BracketResult};
use super::models::{Bracket, BracketMatch, BracketSize, BracketStatus, MatchId, Slot};
use crate::shuffle::Shuffler;
use crate::types::{BowlerId, Pins};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Minimum entrants needed to draw a bracket
pub const MIN_ENTRANTS: usize = 2;

/// Result of advancing a winner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advance {
    /// Bracket after the advance
    pub bracket: Bracket,
    /// Whether the final has been decided
    pub complete: bool,
}

/// Determine the winner of a match
///
/// A bye always resolves to the present bowler, whatever the score fields
/// hold. Otherwise the strictly higher score wins.
///
/// # Errors
///
/// * `BracketError::Tie` - Equal scores; a tie-broken score must be re-entered
/// * `BracketError::MissingScores` - Both bowlers present but a score is missing
/// * `BracketError::NotReady` - A slot is still waiting for an earlier match
pub fn determine_winner(m: &BracketMatch) -> BracketResult<BowlerId> {
    match (m.slot_a, m.slot_b) {
        (Slot::Occupied(a), Slot::Bye) => Ok(a),
        (Slot::Bye, Slot::Occupied(b)) => Ok(b),
        (Slot::Occupied(a), Slot::Occupied(b)) => match (m.score_a, m.score_b) {
            (Some(score_a), Some(score_b)) if score_a > score_b => Ok(a),
            (Some(score_a), Some(score_b)) if score_b > score_a => Ok(b),
            (Some(score), Some(_)) => Err(BracketError::Tie {
                match_id: m.id,
                score,
            }),
            _ => Err(BracketError::MissingScores(m.id)),
        },
        _ => Err(BracketError::NotReady(m.id)),
    }
}

/// Entrants never on the losing side of a decided match, in input order
pub fn still_alive(matches: &[BracketMatch], entrants: &[BowlerId]) -> Vec<BowlerId> {
    let eliminated: HashSet<BowlerId> = matches.iter().filter_map(BracketMatch::loser).collect();

    entrants
        .iter()
        .copied()
        .filter(|id| !eliminated.contains(id))
        .collect()
}

fn validate_entrants(entrants: &[BowlerId], size: BracketSize) -> BracketResult<()> {
    if entrants.len() < MIN_ENTRANTS {
        return Err(BracketError::InsufficientEntrants {
            needed: MIN_ENTRANTS,
            current: entrants.len(),
        });
    }

    let capacity = size.effective_size();
    if entrants.len() > capacity {
        return Err(BracketError::TooManyEntrants {
            capacity,
            current: entrants.len(),
        });
    }

    let mut seen = HashSet::with_capacity(entrants.len());
    for &id in entrants {
        if !seen.insert(id) {
            return Err(BracketError::DuplicateEntrant(id));
        }
    }

    Ok(())
}

/// Index of the first match of `round` when matches are stored round by round
fn round_offset(effective: usize, round: u32) -> usize {
    effective - (effective >> (round - 1))
}

fn bye_winner(m: &BracketMatch) -> Option<BowlerId> {
    if m.is_bye() {
        m.slot_a.bowler().or(m.slot_b.bowler())
    } else {
        None
    }
}

impl Bracket {
    /// Draw a bracket: shuffle the entrants, then lay them out with [`Bracket::from_order`]
    ///
    /// # Arguments
    ///
    /// * `entrants` - Bowler IDs entered in the bracket
    /// * `size` - Requested bracket size
    /// * `shuffler` - Randomness source; a seeded shuffler gives a reproducible draw
    ///
    /// # Errors
    ///
    /// * `BracketError::InsufficientEntrants` - Fewer than two entrants
    /// * `BracketError::TooManyEntrants` - More entrants than slots
    /// * `BracketError::DuplicateEntrant` - A bowler listed twice
    pub fn generate(
        entrants: &[BowlerId],
        size: BracketSize,
        shuffler: &mut Shuffler,
    ) -> BracketResult<Self> {
        validate_entrants(entrants, size)?;
        let order = shuffler.shuffled(entrants);
        Self::from_order(&order, size)
    }

    /// Lay entrants into the tree in the order given, without shuffling
    ///
    /// The list is padded with byes to the effective size and consecutive
    /// slots are paired into round-one matches. A round-one match with a single
    /// bowler is decided on the spot. Later rounds start empty, except that a
    /// match with byes on both sides passes a bye down to the slot it feeds.
    pub fn from_order(entrants: &[BowlerId], size: BracketSize) -> BracketResult<Self> {
        validate_entrants(entrants, size)?;

        let effective = size.effective_size();
        let rounds = size.rounds();

        let mut slots: Vec<Slot> = entrants.iter().map(|&id| Slot::Occupied(id)).collect();
        slots.resize(effective, Slot::Bye);

        let mut matches = Vec::with_capacity(effective - 1);
        for round in 1..=rounds {
            let offset = round_offset(effective, round);
            let count = effective >> round;
            for position in 0..count {
                let mut m = BracketMatch::pending((offset + position) as MatchId, round, position as u32);

                if round == 1 {
                    m.slot_a = slots[2 * position];
                    m.slot_b = slots[2 * position + 1];
                    m.winner = bye_winner(&m);
                }

                if round < rounds {
                    let next = round_offset(effective, round + 1) + position / 2;
                    m.next_match = Some(next as MatchId);
                }

                matches.push(m);
            }
        }

        // Matches are stored in round order, so one forward pass settles chains of byes.
        for idx in 0..matches.len() {
            if !matches[idx].is_void() {
                continue;
            }
            if let Some(next) = matches[idx].next_match {
                let feeds_a = matches[idx].position % 2 == 0;
                let target = &mut matches[next as usize];
                if feeds_a {
                    target.slot_a = Slot::Bye;
                } else {
                    target.slot_b = Slot::Bye;
                }
            }
        }

        debug!(
            "Drew {}-entrant bracket: {} matches over {} rounds, {} byes",
            entrants.len(),
            matches.len(),
            rounds,
            effective - entrants.len()
        );

        Ok(Self {
            size,
            status: BracketStatus::Open,
            entrants: entrants.to_vec(),
            matches,
        })
    }

    /// Draw a bracket and immediately move every bye winner into round two
    pub fn start(
        entrants: &[BowlerId],
        size: BracketSize,
        shuffler: &mut Shuffler,
    ) -> BracketResult<Self> {
        Self::generate(entrants, size, shuffler)?
            .advance_byes()
            .map(|advance| advance.bracket)
    }

    /// Advance every decided round-one bye into the slot it feeds
    pub fn advance_byes(&self) -> BracketResult<Advance> {
        let mut bracket = self.clone();
        let mut complete = false;

        let byes: Vec<(MatchId, BowlerId)> = self
            .matches
            .iter()
            .filter(|m| m.round == 1 && m.is_bye())
            .filter_map(|m| m.winner.map(|w| (m.id, w)))
            .collect();

        for (match_id, winner) in byes {
            let advance = bracket.advance_winner(match_id, winner)?;
            complete |= advance.complete;
            bracket = advance.bracket;
        }

        if bracket.status == BracketStatus::Open {
            bracket.status = BracketStatus::InProgress;
        }

        Ok(Advance { bracket, complete })
    }

    /// Look up a match by ID
    pub fn find_match(&self, match_id: MatchId) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Matches of one round, by position
    pub fn round(&self, round: u32) -> Vec<&BracketMatch> {
        self.matches.iter().filter(|m| m.round == round).collect()
    }

    /// The final match
    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.next_match.is_none())
    }

    /// Bracket winner, once the final is decided
    pub fn champion(&self) -> Option<BowlerId> {
        self.final_match().and_then(|m| m.winner)
    }

    /// Entrants not yet knocked out, in draw order
    pub fn still_alive(&self) -> Vec<BowlerId> {
        still_alive(&self.matches, &self.entrants)
    }

    /// Mark a match decided and move the winner into the next round
    ///
    /// The winner fills slot A of match `(round + 1, position / 2)` when the
    /// source position is even and slot B when odd. If that match becomes a
    /// bye it is resolved straight away. Repeating an advance with the same
    /// winner changes nothing.
    ///
    /// # Returns
    ///
    /// * `Advance` - New bracket and whether the final is now decided
    ///
    /// # Errors
    ///
    /// * `BracketError::UnknownMatch` - No match with this ID
    /// * `BracketError::NotInMatch` - Winner is not in the match
    /// * `BracketError::NotReady` - The opponent's slot is still empty
    /// * `BracketError::AlreadyDecided` - Match already has a different winner
    /// * `BracketError::SlotTaken` - Downstream slot holds another bowler
    pub fn advance_winner(&self, match_id: MatchId, winner: BowlerId) -> BracketResult<Advance> {
        let mut bracket = self.clone();
        let complete = bracket.apply_advance(match_id, winner)?;

        if complete {
            bracket.status = BracketStatus::Completed;
            info!("Bracket complete: bowler {} wins", winner);
        } else if bracket.status == BracketStatus::Open {
            bracket.status = BracketStatus::InProgress;
        }

        Ok(Advance { bracket, complete })
    }

    /// Record both scores for a ready match, decide it and advance the winner
    ///
    /// # Errors
    ///
    /// * `BracketError::NotReady` - A bowler is missing from the match
    /// * `BracketError::AlreadyDecided` - Match already has a result
    /// * `BracketError::InvalidScore` - Negative score
    /// * `BracketError::Tie` - Equal scores; nothing is recorded
    pub fn record_result(
        &self,
        match_id: MatchId,
        score_a: Pins,
        score_b: Pins,
    ) -> BracketResult<Advance> {
        let idx = self.match_index(match_id)?;
        let current = &self.matches[idx];

        if let Some(winner) = current.winner {
            return Err(BracketError::AlreadyDecided { match_id, winner });
        }
        if !current.is_ready() {
            return Err(BracketError::NotReady(match_id));
        }
        for score in [score_a, score_b] {
            if score < 0 {
                return Err(BracketError::InvalidScore { match_id, score });
            }
        }

        let mut scored = self.clone();
        scored.matches[idx].score_a = Some(score_a);
        scored.matches[idx].score_b = Some(score_b);
        let winner = determine_winner(&scored.matches[idx])?;

        debug!(
            "Match {} scored {}-{}, bowler {} advances",
            match_id, score_a, score_b, winner
        );

        scored.advance_winner(match_id, winner)
    }

    fn match_index(&self, match_id: MatchId) -> BracketResult<usize> {
        self.matches
            .iter()
            .position(|m| m.id == match_id)
            .ok_or(BracketError::UnknownMatch(match_id))
    }

    /// Apply an advance in place; returns whether the final was decided.
    /// Only called on a private clone, so a failure never leaks a partial update.
    fn apply_advance(&mut self, match_id: MatchId, winner: BowlerId) -> BracketResult<bool> {
        let idx = self.match_index(match_id)?;
        let source = &self.matches[idx];

        if !source.involves(winner) {
            return Err(BracketError::NotInMatch {
                match_id,
                bowler_id: winner,
            });
        }
        if let Some(existing) = source.winner
            && existing != winner
        {
            return Err(BracketError::AlreadyDecided {
                match_id,
                winner: existing,
            });
        }
        // Only a played pairing or a bye can be decided; an empty slot is still waiting
        if !(source.is_ready() || source.is_bye() || source.winner == Some(winner)) {
            return Err(BracketError::NotReady(match_id));
        }

        let next_round = source.round + 1;
        let next_position = source.position / 2;
        let feeds_a = source.position % 2 == 0;
        self.matches[idx].winner = Some(winner);

        let Some(next_idx) = self
            .matches
            .iter()
            .position(|m| m.round == next_round && m.position == next_position)
        else {
            return Ok(true);
        };

        let target = &mut self.matches[next_idx];
        let slot = if feeds_a {
            &mut target.slot_a
        } else {
            &mut target.slot_b
        };
        match *slot {
            Slot::Occupied(existing) if existing != winner => {
                return Err(BracketError::SlotTaken {
                    match_id: target.id,
                    bowler_id: existing,
                });
            }
            _ => *slot = Slot::Occupied(winner),
        }

        if target.is_bye() {
            let next_id = target.id;
            let bye_winner = determine_winner(target)?;
            return self.apply_advance(next_id, bye_winner);
        }

        Ok(false)
    }
}
