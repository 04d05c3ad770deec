//! Data structures for the Swiss tournament: players, results, pairings, tournament state.

mod player;
mod round;
mod tournament;

pub use player::{is_bye_id, Color, GameResult, Player, PlayerId, ScoreCode, BYE_ID};
pub use round::{Pair, RoundInfo};
pub use tournament::{Tournament, TournamentError, TournamentState};
