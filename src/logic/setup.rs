//! Setup phase: roster import and start (freeze the rating ranking, transition Setup -> Ongoing).

use crate::models::{PlayerId, Tournament, TournamentError, TournamentState, BYE_ID};
use serde::Deserialize;
use std::io::Read;

/// Start the tournament.
///
/// 1. Stable sort of the rating ranking, highest rating first (ties keep registration order).
/// 2. Assign 1-based rating positions and build the rank map (0 -> bye sentinel).
/// 3. Seed the points ranking with the rating ranking.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }

    let participants = &tournament.participants;
    tournament
        .ratings_rank
        .sort_by(|a, b| participants[b].rating.cmp(&participants[a].rating));

    let mut rank_to_id = Vec::with_capacity(tournament.ratings_rank.len() + 1);
    rank_to_id.push(BYE_ID.to_string());
    for (idx, id) in tournament.ratings_rank.iter().enumerate() {
        let position = idx + 1;
        if let Some(p) = tournament.participants.get_mut(id) {
            p.rating_pos = position;
            p.points_pos = position;
        }
        rank_to_id.push(id.clone());
    }
    tournament.rank_to_id = rank_to_id;
    tournament.points_rank = tournament.ratings_rank.clone();
    tournament.state = TournamentState::Ongoing;

    log::info!(
        "Started tournament '{}' with {} players over {} rounds",
        tournament.name,
        tournament.ratings_rank.len(),
        tournament.rounds
    );
    Ok(())
}

/// One row of a roster file (`id,rating` header).
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub rating: i32,
}

/// Errors reading a roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Invalid roster: {0}")]
    Csv(#[from] csv::Error),
}

/// Parse a CSV roster with an `id,rating` header. Surrounding whitespace is trimmed.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<RosterEntry>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let entries = rdr
        .deserialize::<RosterEntry>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

/// Register every roster entry. Duplicates are skipped (logged). A roster naming the bye
/// sentinel is rejected before anything is registered. Returns the ids that were registered.
pub fn register_roster(
    tournament: &mut Tournament,
    entries: &[RosterEntry],
) -> Result<Vec<PlayerId>, TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    if entries.iter().any(|e| e.id == BYE_ID) {
        return Err(TournamentError::ReservedIdentifier);
    }
    let mut registered = Vec::new();
    for entry in entries {
        match tournament.register(entry.id.clone(), entry.rating) {
            Ok(()) => registered.push(entry.id.clone()),
            Err(TournamentError::DuplicateParticipant(id)) => {
                log::warn!("Skipping duplicate roster entry {}", id);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(registered)
}
