//! Request document: tournament name, one fixed-width line per player, round count and point table.
//!
//! Column widths are what the engine's parser expects; change nothing here without
//! updating the pinned strings in `tests/interchange.rs`.

use crate::models::{GameResult, Player, Tournament, TournamentError};

/// Format tag opening the header line.
const HEADER_TAG: &str = "012";
/// Constant closing the header line.
const HEADER_CONSTANT: &str = "1110065304";
/// Record tag opening every player line.
const PLAYER_TAG: &str = "001";
/// Separator between two game triples.
const RESULT_SEPARATOR: &str = "     ";

/// Point values the engine assigns to its own codes, in footer order.
/// W = win, D = draw, F = forfeit loss, U = unpaired (bye). Kept by hand in line with
/// `ScoreCode::value`.
pub const ENGINE_POINT_CODES: [(&str, f64); 4] = [("W", 1.0), ("D", 0.5), ("F", 0.0), ("U", 1.0)];

/// Render the request document for the pairing engine.
///
/// Players appear by rating rank under synthetic labels; opponents are referenced by
/// rating rank, the bye sentinel as 0.
pub fn encode_request(tournament: &Tournament) -> Result<String, TournamentError> {
    tournament.require_ongoing()?;

    let mut doc = format!("{} {} {}\n", HEADER_TAG, tournament.name(), HEADER_CONSTANT);
    for (idx, id) in tournament.ratings_rank().iter().enumerate() {
        let player = tournament
            .player(id)
            .ok_or_else(|| TournamentError::UnknownParticipant(id.clone()))?;
        doc.push_str(&player_line(tournament, idx + 1, player)?);
        doc.push('\n');
    }

    doc.push_str(&format!("XXR {}\n", tournament.rounds()));
    for (code, value) in ENGINE_POINT_CODES {
        doc.push_str(&format!("BB{}{:2}{:.1}\n", code, "", value));
    }
    Ok(doc)
}

fn player_line(
    tournament: &Tournament,
    rank: usize,
    player: &Player,
) -> Result<String, TournamentError> {
    let history = player
        .results
        .iter()
        .map(|r| result_triple(tournament, r))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!(
        "{}{:5}{:6}Test{:04} Player{:04}{:19}{:32.1}{:5}{:5}{}",
        PLAYER_TAG,
        rank,
        "",
        rank,
        rank,
        player.rating,
        player.points,
        player.points_pos,
        "",
        history.join(RESULT_SEPARATOR)
    ))
}

/// Opponent rank, color, score. An opponent that is neither a participant nor the bye sentinel is an error.
fn result_triple(tournament: &Tournament, result: &GameResult) -> Result<String, TournamentError> {
    let opponent_rank = tournament
        .rating_pos_of(&result.opponent)
        .ok_or_else(|| TournamentError::UnknownParticipant(result.opponent.clone()))?;
    Ok(format!(
        "{} {} {}",
        opponent_rank,
        result.color.code(),
        result.score.code()
    ))
}
