//! Eliminator: a game-by-game cut of the field.

use super::errors::{SidepotError, SidepotResult};
use super::models::EliminatorRound;
use crate::scoring::GameScore;
use crate::types::{BowlerId, Pins};
use log::debug;
use std::collections::HashMap;

/// Score at rank `floor(n * elimination_percentage)` of the descending scores
///
/// The rank is clamped to the last score. An empty list gives a cut of 0.
pub fn cut_score(scores: &[Pins], elimination_percentage: f64) -> Pins {
    if scores.is_empty() {
        return 0;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let cut_index = (sorted.len() as f64 * elimination_percentage).floor() as usize;
    sorted[cut_index.min(sorted.len() - 1)]
}

/// Apply one game's cut to the bowlers still in
///
/// Active bowlers at or above the cut survive. When any active bowler has a
/// score for the game, active bowlers without one are eliminated as
/// no-shows. When nobody does, the cut is 0 and the field carries over.
pub fn eliminator_game(
    still_in: &[BowlerId],
    game_scores: &[GameScore],
    game_number: u32,
    elimination_percentage: f64,
) -> EliminatorRound {
    let by_bowler: HashMap<BowlerId, Pins> = game_scores
        .iter()
        .filter(|s| s.game_number == game_number)
        .map(|s| (s.bowler_id, s.total))
        .collect();

    let active: Vec<Pins> = still_in
        .iter()
        .filter_map(|id| by_bowler.get(id).copied())
        .collect();

    if active.is_empty() {
        return EliminatorRound {
            game_number,
            still_in: still_in.to_vec(),
            eliminated: Vec::new(),
            cut_score: 0,
        };
    }

    let cut = cut_score(&active, elimination_percentage);
    let (survivors, eliminated): (Vec<BowlerId>, Vec<BowlerId>) = still_in
        .iter()
        .copied()
        .partition(|id| by_bowler.get(id).is_some_and(|&total| total >= cut));

    EliminatorRound {
        game_number,
        still_in: survivors,
        eliminated,
        cut_score: cut,
    }
}

/// Run the eliminator for games `1..=games`, carrying survivors forward
///
/// # Errors
///
/// * `SidepotError::InvalidPercentage` - Percentage outside [0, 1]
pub fn run_eliminator(
    bowlers: &[BowlerId],
    scores: &[GameScore],
    games: u32,
    elimination_percentage: f64,
) -> SidepotResult<Vec<EliminatorRound>> {
    if !(0.0..=1.0).contains(&elimination_percentage) {
        return Err(SidepotError::InvalidPercentage(elimination_percentage));
    }

    let mut still_in = bowlers.to_vec();
    let mut rounds = Vec::with_capacity(games as usize);

    for game in 1..=games {
        let round = eliminator_game(&still_in, scores, game, elimination_percentage);
        debug!(
            "Eliminator game {}: cut {}, {} survive, {} out",
            game,
            round.cut_score,
            round.still_in.len(),
            round.eliminated.len()
        );
        still_in.clone_from(&round.still_in);
        rounds.push(round);
    }

    Ok(rounds)
}
