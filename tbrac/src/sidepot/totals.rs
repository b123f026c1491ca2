//! Per-bowler total aggregation shared by every sidepot format.

use super::models::Leader;
use crate::scoring::GameScore;
use crate::types::{BowlerId, Pins};
use std::collections::HashMap;

/// Sum each bowler's totals, in order of first appearance
pub fn bowler_totals(scores: &[GameScore]) -> Vec<(BowlerId, Pins)> {
    let mut index: HashMap<BowlerId, usize> = HashMap::new();
    let mut totals: Vec<(BowlerId, Pins)> = Vec::new();

    for score in scores {
        match index.get(&score.bowler_id) {
            Some(&i) => totals[i].1 += score.total,
            None => {
                index.insert(score.bowler_id, totals.len());
                totals.push((score.bowler_id, score.total));
            }
        }
    }

    totals
}

/// Look up one bowler's total; bowlers without scores count as zero
pub fn total_for(totals: &[(BowlerId, Pins)], bowler_id: BowlerId) -> Pins {
    totals
        .iter()
        .find(|(id, _)| *id == bowler_id)
        .map_or(0, |(_, total)| *total)
}

/// Highest score among candidates; every bowler sharing it is reported
pub fn leader<I>(candidates: I) -> Option<Leader>
where
    I: IntoIterator<Item = (BowlerId, Pins)>,
{
    let mut top: Option<Pins> = None;
    let mut bowler_ids: Vec<BowlerId> = Vec::new();

    for (bowler_id, score) in candidates {
        match top {
            Some(best) if score < best => {}
            Some(best) if score == best => bowler_ids.push(bowler_id),
            _ => {
                top = Some(score);
                bowler_ids = vec![bowler_id];
            }
        }
    }

    let score = top?;
    if let [bowler_id] = bowler_ids[..] {
        Some(Leader::Outright { bowler_id, score })
    } else {
        Some(Leader::Tie { bowler_ids, score })
    }
}
