//! Sidepot module: side competitions scored over an event's games.
//!
//! Six formats share one [`Resolve`] trait, dispatched through the
//! [`Competition`] enum:
//!
//! - High game (per game) and high series (all games)
//! - Mystery doubles (drawn partners) and love doubles (chosen partners)
//! - Eliminator (the field is cut after every game)
//! - Sweeper (total pins with standard competition ranking)
//!
//! Ties are always reported, never broken.

pub mod doubles;
pub mod eliminator;
pub mod errors;
pub mod formats;
pub mod high_game;
pub mod lifecycle;
pub mod models;
pub mod sweeper;
pub mod totals;

pub use doubles::{
    MIN_DOUBLES_ENTRANTS, doubles_standings, love_doubles_standings, mystery_pairings,
    validate_teams,
};
pub use eliminator::{cut_score, eliminator_game, run_eliminator};
pub use errors::{SidepotError, SidepotResult};
pub use formats::{
    Competition, Eliminator, HighGame, HighSeries, LoveDoubles, MysteryDoubles, Resolve, Sweeper,
};
pub use high_game::{all_high_game_winners, high_game_winner, high_series_winner};
pub use lifecycle::{Sidepot, sidepot_prize_pool};
pub use models::{
    DoublesTeam, EliminatorRound, EntryStatus, HighGameResult, Leader, Pair, Pairings,
    SidepotEntry, SidepotKind, SidepotOutcome, SidepotStatus, SweeperStanding,
};
pub use sweeper::sweeper_standings;
pub use totals::{bowler_totals, leader, total_for};
