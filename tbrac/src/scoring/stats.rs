//! Per-bowler statistics and average maintenance.

use super::models::{BowlerStats, GameScore};
use crate::types::{BowlerId, Pins};
use std::collections::BTreeMap;

/// Round `numerator / denominator` half-up (`floor(x + 0.5)`), for `denominator > 0`
fn round_div(numerator: i64, denominator: i64) -> i64 {
    (2 * numerator + denominator).div_euclid(2 * denominator)
}

/// Calculate statistics for one bowler from a score set
///
/// Scores belonging to other bowlers are ignored. A bowler with no games gets
/// an all-zero stats object.
pub fn calculate_bowler_stats(bowler_id: BowlerId, scores: &[GameScore]) -> BowlerStats {
    let pins: Vec<Pins> = scores
        .iter()
        .filter(|s| s.bowler_id == bowler_id)
        .map(|s| s.pins)
        .collect();

    let (Some(&high_game), Some(&low_game)) = (pins.iter().max(), pins.iter().min()) else {
        return BowlerStats::empty(bowler_id);
    };

    let total_pins: Pins = pins.iter().sum();
    let games_played = pins.len() as u32;

    BowlerStats {
        bowler_id,
        games_played,
        total_pins,
        average: round_div(i64::from(total_pins), i64::from(games_played)) as Pins,
        high_game,
        low_game,
        high_series: total_pins,
    }
}

/// Calculate statistics for every bowler appearing in a score set
pub fn calculate_all_bowler_stats(scores: &[GameScore]) -> BTreeMap<BowlerId, BowlerStats> {
    let mut stats = BTreeMap::new();
    for score in scores {
        stats
            .entry(score.bowler_id)
            .or_insert_with(|| calculate_bowler_stats(score.bowler_id, scores));
    }
    stats
}

/// Merge newly bowled games into a rolling average
///
/// # Arguments
///
/// * `current_average` - Average before the new games
/// * `current_games` - Number of games behind `current_average`
/// * `new_scores` - Raw pin counts of the new games
///
/// # Returns
///
/// * `Pins` - `round((avg * games + sum(new)) / (games + new.len()))`, or the
///   current average unchanged when there are no new games
pub fn recalculate_average(current_average: Pins, current_games: u32, new_scores: &[Pins]) -> Pins {
    if new_scores.is_empty() {
        return current_average;
    }

    let current_total = i64::from(current_average) * i64::from(current_games);
    let new_total: i64 = new_scores.iter().map(|&s| i64::from(s)).sum();
    let total_games = i64::from(current_games) + new_scores.len() as i64;

    round_div(current_total + new_total, total_games) as Pins
}
