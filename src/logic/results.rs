//! Recording game outcomes and byes into player histories.

use crate::models::{Color, ScoreCode, Tournament, TournamentError, BYE_ID};
use serde::{Deserialize, Serialize};

/// Outcome of a game between two registered players.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    /// (white score, black score)
    fn scores(self) -> (ScoreCode, ScoreCode) {
        match self {
            Outcome::WhiteWins => (ScoreCode::Win, ScoreCode::Loss),
            Outcome::BlackWins => (ScoreCode::Loss, ScoreCode::Win),
            Outcome::Draw => (ScoreCode::Draw, ScoreCode::Draw),
        }
    }
}

/// Record a game: one result appended to each side's history, points updated for both.
///
/// Both ids are validated before either player is touched, so a failure changes nothing.
/// Standings are stale until `sort_by_points` runs again.
pub fn record_game(
    tournament: &mut Tournament,
    white: &str,
    black: &str,
    outcome: Outcome,
) -> Result<(), TournamentError> {
    tournament.require_ongoing()?;
    tournament.require_registered(white)?;
    tournament.require_registered(black)?;
    if white == black {
        return Err(TournamentError::SamePlayer(white.to_string()));
    }

    let (white_score, black_score) = outcome.scores();
    if let Some(p) = tournament.participants.get_mut(white) {
        p.push_result(black.to_string(), Color::White, white_score);
    }
    if let Some(p) = tournament.participants.get_mut(black) {
        p.push_result(white.to_string(), Color::Black, black_score);
    }

    log::debug!("{} (w) vs {} (b): {:?}", white, black, outcome);
    Ok(())
}

/// Give `id` a bye: opponent is the sentinel, color White, worth a full win.
pub fn assign_bye(tournament: &mut Tournament, id: &str) -> Result<(), TournamentError> {
    tournament.require_ongoing()?;
    let player = tournament
        .participants
        .get_mut(id)
        .ok_or_else(|| TournamentError::UnknownParticipant(id.to_string()))?;
    player.push_result(BYE_ID.to_string(), Color::White, ScoreCode::Bye);

    log::debug!("{} receives a bye", id);
    Ok(())
}
