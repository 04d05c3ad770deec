//! Tournament and TournamentState.

use crate::models::player::{is_bye_id, Player, PlayerId, BYE_ID};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A player with this id is already registered. Nothing was changed.
    DuplicateParticipant(PlayerId),
    /// No registered player has this id.
    UnknownParticipant(PlayerId),
    /// The bye sentinel cannot be registered as a player.
    ReservedIdentifier,
    /// A game needs two different players.
    SamePlayer(PlayerId),
    /// Tournament is not in a state that allows this action.
    InvalidState,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::DuplicateParticipant(id) => write!(f, "Player {} is already registered", id),
            TournamentError::UnknownParticipant(id) => write!(f, "Unknown player {}", id),
            TournamentError::ReservedIdentifier => write!(f, "{} is reserved for byes", BYE_ID),
            TournamentError::SamePlayer(id) => write!(f, "Player {} cannot play against themselves", id),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Registering players; rankings not frozen yet.
    #[default]
    Setup,
    /// Rating ranking frozen; results are being recorded and rounds paired.
    Ongoing,
}

/// Full tournament state: participants, both rankings and the rank map.
///
/// `ratings_rank` is frozen at start and `rank_to_id` is its inverse with
/// index 0 holding the bye sentinel. `points_rank` holds the same ids and is
/// only ever re-sorted, together with every `points_pos`.
#[derive(Clone, Debug, Serialize)]
pub struct Tournament {
    pub(crate) name: String,
    pub(crate) rounds: u32,
    pub(crate) participants: HashMap<PlayerId, Player>,
    pub(crate) ratings_rank: Vec<PlayerId>,
    pub(crate) points_rank: Vec<PlayerId>,
    pub(crate) rank_to_id: Vec<PlayerId>,
    pub(crate) state: TournamentState,
}

impl Tournament {
    /// Create a new tournament in Setup state with no players.
    pub fn new(name: impl Into<String>, rounds: u32) -> Self {
        Self {
            name: name.into(),
            rounds,
            participants: HashMap::new(),
            ratings_rank: Vec::new(),
            points_rank: Vec::new(),
            rank_to_id: vec![BYE_ID.to_string()],
            state: TournamentState::Setup,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of rounds announced to the pairing engine.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn state(&self) -> TournamentState {
        self.state
    }

    pub fn is_ongoing(&self) -> bool {
        self.state == TournamentState::Ongoing
    }

    pub fn player_count(&self) -> usize {
        self.participants.len()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.participants.get(id)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.participants.values()
    }

    /// Ids by descending rating (registration order before start).
    pub fn ratings_rank(&self) -> &[PlayerId] {
        &self.ratings_rank
    }

    /// Ids by standing after the last sort.
    pub fn points_rank(&self) -> &[PlayerId] {
        &self.points_rank
    }

    /// Rating-rank to id; index 0 is the bye sentinel.
    pub fn rank_to_id(&self) -> &[PlayerId] {
        &self.rank_to_id
    }

    /// Id holding rating-rank `rank` (0 is the bye sentinel).
    pub fn id_at_rank(&self, rank: usize) -> Option<&PlayerId> {
        self.rank_to_id.get(rank)
    }

    /// Rating-rank of `id`; the bye sentinel is always 0.
    pub fn rating_pos_of(&self, id: &str) -> Option<usize> {
        if is_bye_id(id) {
            return Some(0);
        }
        self.participants.get(id).map(|p| p.rating_pos)
    }

    pub(crate) fn require_ongoing(&self) -> Result<(), TournamentError> {
        if self.state != TournamentState::Ongoing {
            return Err(TournamentError::InvalidState);
        }
        Ok(())
    }

    pub(crate) fn require_registered(&self, id: &str) -> Result<(), TournamentError> {
        if !self.participants.contains_key(id) {
            return Err(TournamentError::UnknownParticipant(id.to_string()));
        }
        Ok(())
    }

    /// Register a player (valid in Setup only). Ids must be unique and must not be the bye sentinel.
    /// A duplicate leaves the tournament untouched.
    pub fn register(&mut self, id: impl Into<PlayerId>, rating: i32) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let id = id.into();
        if is_bye_id(&id) {
            return Err(TournamentError::ReservedIdentifier);
        }
        if self.participants.contains_key(&id) {
            return Err(TournamentError::DuplicateParticipant(id));
        }
        let player = Player::new(id.clone(), rating, self.ratings_rank.len());
        self.participants.insert(id.clone(), player);
        self.ratings_rank.push(id);
        Ok(())
    }
}
