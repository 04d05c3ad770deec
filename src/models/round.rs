//! Pairings returned by the external engine.

use crate::models::player::{is_bye_id, PlayerId};
use serde::{Deserialize, Serialize};

/// One board: who plays White and who plays Black.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pair {
    pub white: PlayerId,
    pub black: PlayerId,
}

impl Pair {
    pub fn new(white: impl Into<PlayerId>, black: impl Into<PlayerId>) -> Self {
        Self {
            white: white.into(),
            black: black.into(),
        }
    }

    /// Black resolved to the bye sentinel: White sits out with a bye.
    pub fn is_bye(&self) -> bool {
        is_bye_id(&self.black)
    }
}

/// A decoded pairing response.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundInfo {
    pub round: u32,
    pub pairs: Vec<Pair>,
}

impl RoundInfo {
    /// Players receiving a bye this round.
    pub fn byes(&self) -> impl Iterator<Item = &PlayerId> {
        self.pairs.iter().filter(|p| p.is_bye()).map(|p| &p.white)
    }

    /// Boards with two real players.
    pub fn games(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter().filter(|p| !p.is_bye())
    }
}
