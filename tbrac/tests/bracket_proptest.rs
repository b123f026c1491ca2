/// Property-based tests for brackets, payouts and handicaps using proptest
///
/// These tests check the structural guarantees over random entrant counts,
/// seeds, pools and averages.
use proptest::prelude::*;
use tbrac::bracket::{Bracket, BracketSize, BracketStatus, Slot};
use tbrac::payout::payout_structure;
use tbrac::scoring::{HandicapConfig, calculate_handicap};
use tbrac::sidepot::{cut_score, sweeper_standings};
use tbrac::{GameScore, Shuffler};

// Strategy to pick one of the standard bracket sizes
fn size_strategy() -> impl Strategy<Value = BracketSize> {
    prop::sample::select(BracketSize::ALL.to_vec())
}

// Strategy for a size and an entrant count that fits in it
fn size_and_entrants() -> impl Strategy<Value = (BracketSize, usize)> {
    size_strategy().prop_flat_map(|size| (Just(size), 2..=size.effective_size()))
}

fn ids(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

/// Decide every ready match in favour of slot A until nothing is left to play
fn play_out(mut bracket: Bracket) -> Bracket {
    while let Some(id) = bracket.matches.iter().find(|m| m.is_ready()).map(|m| m.id) {
        bracket = bracket.record_result(id, 200, 150).unwrap().bracket;
    }
    bracket
}

proptest! {
    #[test]
    fn test_match_counts((size, n) in size_and_entrants(), seed in any::<u64>()) {
        let bracket = Bracket::generate(&ids(n), size, &mut Shuffler::seeded(seed)).unwrap();
        let effective = size.effective_size();

        prop_assert_eq!(bracket.matches.len(), effective - 1);
        prop_assert_eq!(bracket.round(1).len(), effective / 2);
        prop_assert_eq!(bracket.final_match().map(|m| m.round), Some(size.rounds()));
    }

    #[test]
    fn test_every_entrant_drawn_once((size, n) in size_and_entrants(), seed in any::<u64>()) {
        let bracket = Bracket::generate(&ids(n), size, &mut Shuffler::seeded(seed)).unwrap();

        let mut drawn: Vec<i64> = bracket
            .round(1)
            .iter()
            .flat_map(|m| [m.slot_a, m.slot_b])
            .filter_map(|slot| slot.bowler())
            .collect();
        drawn.sort_unstable();
        prop_assert_eq!(drawn, ids(n));

        let byes = bracket
            .round(1)
            .iter()
            .flat_map(|m| [m.slot_a, m.slot_b])
            .filter(|slot| *slot == Slot::Bye)
            .count();
        prop_assert_eq!(byes, size.effective_size() - n);
    }

    #[test]
    fn test_play_out_crowns_one_entrant((size, n) in size_and_entrants(), seed in any::<u64>()) {
        let bracket = Bracket::start(&ids(n), size, &mut Shuffler::seeded(seed)).unwrap();
        // No decided bye is left waiting after start
        prop_assert!(bracket.round(1).iter().filter(|m| m.is_bye()).all(|m| m.is_decided()));

        let finished = play_out(bracket);
        prop_assert_eq!(finished.status, BracketStatus::Completed);
        let champion = finished.champion().unwrap();
        prop_assert!(ids(n).contains(&champion));
        prop_assert_eq!(finished.still_alive(), vec![champion]);
    }

    #[test]
    fn test_advance_is_idempotent((size, n) in size_and_entrants(), seed in any::<u64>()) {
        let bracket = Bracket::generate(&ids(n), size, &mut Shuffler::seeded(seed)).unwrap();
        let ready = bracket.matches.iter().find(|m| m.is_ready()).map(|m| (m.id, m.slot_a.bowler()));

        if let Some((match_id, Some(winner))) = ready {
            let once = bracket.advance_winner(match_id, winner).unwrap();
            let twice = once.bracket.advance_winner(match_id, winner).unwrap();
            prop_assert_eq!(once.bracket, twice.bracket);
        }
    }

    #[test]
    fn test_payout_conserves_pool(pool in 0i64..=1_000_000_000, entrants in 1usize..=200) {
        let structure = payout_structure(pool, entrants, None).unwrap();
        let sum: i64 = structure.tiers.iter().map(|t| t.amount).sum();

        prop_assert_eq!(sum, pool);
        prop_assert!(structure.tiers.iter().all(|t| t.amount >= 0));
        // Places are 1..=k in order
        for (idx, tier) in structure.tiers.iter().enumerate() {
            prop_assert_eq!(tier.place as usize, idx + 1);
        }
    }

    #[test]
    fn test_handicap_bounds(
        average in 0i32..=300,
        base in 150i32..=250,
        percentage in 0.0f64..=1.0,
        max in prop::option::of(0i32..=100),
    ) {
        let mut config = HandicapConfig::new(base, percentage);
        config.max_handicap = max;
        let handicap = calculate_handicap(average, &config);

        prop_assert!(handicap >= 0);
        prop_assert!(handicap <= (base - average).max(0));
        if let Some(max) = max {
            prop_assert!(handicap <= max);
        }
    }

    #[test]
    fn test_cut_score_is_a_bowled_score(
        scores in prop::collection::vec(0i32..=300, 1..40),
        percentage in 0.0f64..=1.0,
    ) {
        let cut = cut_score(&scores, percentage);
        prop_assert!(scores.contains(&cut));
        // At least one bowler always clears the cut
        prop_assert!(scores.iter().any(|&s| s >= cut));
    }

    #[test]
    fn test_sweeper_positions(totals in prop::collection::vec(0i32..=300, 1..30)) {
        let scores: Vec<GameScore> = totals
            .iter()
            .enumerate()
            .map(|(idx, &pins)| GameScore::new(idx as i64 + 1, 1, 1, pins, 0))
            .collect();
        let standings = sweeper_standings(&scores);

        prop_assert_eq!(standings.len(), totals.len());
        prop_assert_eq!(standings[0].position, 1);
        for pair in standings.windows(2) {
            prop_assert!(pair[0].total_pins >= pair[1].total_pins);
            if pair[0].total_pins == pair[1].total_pins {
                prop_assert_eq!(pair[0].position, pair[1].position);
            } else {
                prop_assert!(pair[1].position > pair[0].position);
            }
        }
    }
}
