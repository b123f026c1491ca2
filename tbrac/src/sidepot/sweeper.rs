//! Sweeper: total pins with standard competition ranking.

use super::models::SweeperStanding;
use super::totals::bowler_totals;
use crate::scoring::GameScore;

/// Rank bowlers by total, highest first
///
/// Tied totals share a position and the next distinct total skips ahead by the
/// size of the tie group (1, 2, 2, 4).
pub fn sweeper_standings(scores: &[GameScore]) -> Vec<SweeperStanding> {
    let mut totals = bowler_totals(scores);
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    let mut standings: Vec<SweeperStanding> = Vec::with_capacity(totals.len());
    for (index, (bowler_id, total_pins)) in totals.into_iter().enumerate() {
        let position = match standings.last() {
            Some(prev) if prev.total_pins == total_pins => prev.position,
            _ => index as u32 + 1,
        };
        standings.push(SweeperStanding {
            bowler_id,
            total_pins,
            position,
        });
    }

    standings
}
