//! Entrant seeding.

use super::models::SeedingMethod;
use crate::scoring::Bowler;
use crate::shuffle::Shuffler;
use crate::types::BowlerId;

/// Order bowlers for the draw
///
/// `ByAverage` and `ByHandicap` sort descending with a stable sort, so bowlers
/// with equal keys keep their input order. A bowler with no computed handicap
/// seeds as handicap 0.
///
/// # Arguments
///
/// * `bowlers` - Bowlers to seed
/// * `method` - Seeding method
/// * `shuffler` - Only used by `SeedingMethod::Random`
///
/// # Returns
///
/// * `Vec<Bowler>` - Bowlers, top seed first
pub fn seed_bowlers(bowlers: &[Bowler], method: SeedingMethod, shuffler: &mut Shuffler) -> Vec<Bowler> {
    match method {
        SeedingMethod::Random => shuffler.shuffled(bowlers),
        SeedingMethod::ByAverage => {
            let mut seeded = bowlers.to_vec();
            seeded.sort_by(|a, b| b.average.cmp(&a.average));
            seeded
        }
        SeedingMethod::ByHandicap => {
            let mut seeded = bowlers.to_vec();
            seeded.sort_by_key(|b| std::cmp::Reverse(b.handicap.unwrap_or(0)));
            seeded
        }
    }
}

/// Seed bowlers and return only their IDs, ready for [`crate::bracket::Bracket::from_order`]
pub fn seeded_ids(bowlers: &[Bowler], method: SeedingMethod, shuffler: &mut Shuffler) -> Vec<BowlerId> {
    seed_bowlers(bowlers, method, shuffler)
        .iter()
        .map(|b| b.id)
        .collect()
}
