//! Response document: a round number line, then one `white_rank black_rank` line per board.

use crate::interchange::FormatError;
use crate::models::{Pair, PlayerId, RoundInfo};

/// Parse a pairing response, resolving rating ranks through `rank_to_id`
/// (index 0 is the bye sentinel). Blank lines are ignored; tokens after the
/// first two on a line are ignored.
pub fn decode_response(response: &str, rank_to_id: &[PlayerId]) -> Result<RoundInfo, FormatError> {
    let mut lines = response
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, round_line) = lines.next().ok_or(FormatError::EmptyDocument)?;
    let round_token = round_line.trim();
    let round = round_token
        .parse::<u32>()
        .map_err(|_| FormatError::InvalidRound(round_token.to_string()))?;

    let mut pairs = Vec::new();
    for (idx, line) in lines {
        let mut tokens = line.split_whitespace();
        let (white, black) = match (tokens.next(), tokens.next()) {
            (Some(w), Some(b)) => (w, b),
            _ => return Err(FormatError::MissingRank { line: idx + 1 }),
        };
        pairs.push(Pair {
            white: resolve(white, rank_to_id)?,
            black: resolve(black, rank_to_id)?,
        });
    }

    Ok(RoundInfo { round, pairs })
}

fn resolve(token: &str, rank_to_id: &[PlayerId]) -> Result<PlayerId, FormatError> {
    let rank = token
        .parse::<usize>()
        .map_err(|_| FormatError::InvalidRank(token.to_string()))?;
    rank_to_id
        .get(rank)
        .cloned()
        .ok_or(FormatError::UnknownRank(rank))
}
