//! One pairing round trip: encode, hand off to the engine, decode through the rank map.

use crate::interchange::{decode_response, encode_request};
use crate::models::{PlayerId, RoundInfo, Tournament};
use crate::pairing::{PairingEngine, PairingError};

/// Everything needed to pair a round, detached from the tournament.
///
/// Prepare it while holding the tournament, then submit without it: the engine
/// never sees ids and the answer is resolved through the snapshot taken here.
#[derive(Clone, Debug)]
pub struct PairingRequest {
    document: String,
    rank_to_id: Vec<PlayerId>,
}

impl PairingRequest {
    /// Snapshot the request document and rank map. The tournament must be ongoing.
    pub fn prepare(tournament: &Tournament) -> Result<Self, PairingError> {
        Ok(Self {
            document: encode_request(tournament)?,
            rank_to_id: tournament.rank_to_id().to_vec(),
        })
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Run the engine once and decode its answer. No retries.
    pub async fn submit(&self, engine: &dyn PairingEngine) -> Result<RoundInfo, PairingError> {
        let response = engine.pair(&self.document).await?;
        let round = decode_response(&response, &self.rank_to_id)?;
        log::info!("Pairing engine returned {} pairs for round {}", round.pairs.len(), round.round);
        Ok(round)
    }
}

/// Prepare and submit in one go.
pub async fn fetch_pairs(
    tournament: &Tournament,
    engine: &dyn PairingEngine,
) -> Result<RoundInfo, PairingError> {
    PairingRequest::prepare(tournament)?.submit(engine).await
}
