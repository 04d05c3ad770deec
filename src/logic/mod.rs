//! Tournament business logic: setup, result recording, ranking.

mod ranking;
mod results;
mod setup;

pub use ranking::{compare_players, head_to_head, sort_by_points, standings, Standing};
pub use results::{assign_bye, record_game, Outcome};
pub use setup::{read_roster, register_roster, start_tournament, RosterEntry, RosterError};
