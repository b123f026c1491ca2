//! Best-effort rematch avoidance.
//!
//! Draws several candidate brackets and keeps the one whose first round
//! repeats the fewest previous pairings. Nothing guarantees a collision-free
//! draw exists, so the achieved collision count is always returned.

use super::errors::BracketResult;
use super::models::{Bracket, BracketMatch, BracketSize};
use crate::shuffle::Shuffler;
use crate::types::BowlerId;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Best draw found by [`generate_with_history`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RematchOutcome {
    pub bracket: Bracket,
    /// First-round pairings that already met in `prior`
    pub collisions: usize,
    /// Candidates drawn before stopping
    pub attempts: u32,
}

fn pair_key(a: BowlerId, b: BowlerId) -> (BowlerId, BowlerId) {
    (a.min(b), a.max(b))
}

/// Every pairing that has been played, independent of slot order
pub fn prior_pairings(prior: &[BracketMatch]) -> HashSet<(BowlerId, BowlerId)> {
    prior
        .iter()
        .filter_map(BracketMatch::pairing)
        .map(|(a, b)| pair_key(a, b))
        .collect()
}

/// Count first-round pairings of `bracket` found in `history`
pub fn count_collisions(bracket: &Bracket, history: &HashSet<(BowlerId, BowlerId)>) -> usize {
    bracket
        .matches
        .iter()
        .filter(|m| m.round == 1)
        .filter_map(BracketMatch::pairing)
        .filter(|&(a, b)| history.contains(&pair_key(a, b)))
        .count()
}

/// Draw up to `max_attempts` brackets and keep the one with the fewest rematches
///
/// Stops early on a draw with no collisions. A `max_attempts` of zero is
/// treated as one.
///
/// # Errors
///
/// Same as [`Bracket::generate`].
pub fn generate_with_history(
    entrants: &[BowlerId],
    size: BracketSize,
    prior: &[BracketMatch],
    max_attempts: u32,
    shuffler: &mut Shuffler,
) -> BracketResult<RematchOutcome> {
    let history = prior_pairings(prior);
    let max_attempts = max_attempts.max(1);

    let mut best = Bracket::generate(entrants, size, shuffler)?;
    let mut best_collisions = count_collisions(&best, &history);
    let mut attempts = 1;

    while best_collisions > 0 && attempts < max_attempts {
        let candidate = Bracket::generate(entrants, size, shuffler)?;
        let collisions = count_collisions(&candidate, &history);
        attempts += 1;
        if collisions < best_collisions {
            best = candidate;
            best_collisions = collisions;
        }
    }

    if best_collisions > 0 {
        warn!(
            "Rematch avoidance left {} repeat pairing(s) after {} attempts",
            best_collisions, attempts
        );
    } else {
        debug!("Rematch-free draw found after {} attempt(s)", attempts);
    }

    Ok(RematchOutcome {
        bracket: best,
        collisions: best_collisions,
        attempts,
    })
}
