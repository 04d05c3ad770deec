//! Swiss tournament web app: library with models, standings logic, engine interchange and pairing gateway.

pub mod interchange;
pub mod logic;
pub mod models;
pub mod pairing;

pub use interchange::{decode_response, encode_request, FormatError, ENGINE_POINT_CODES};
pub use logic::{
    assign_bye, compare_players, head_to_head, read_roster, record_game, register_roster,
    sort_by_points, standings, start_tournament, Outcome, RosterEntry, RosterError, Standing,
};
pub use models::{
    is_bye_id, Color, GameResult, Pair, Player, PlayerId, RoundInfo, ScoreCode, Tournament,
    TournamentError, TournamentState, BYE_ID,
};
pub use pairing::{
    fetch_pairs, BbpPairingsEngine, PairingConfig, PairingEngine, PairingError, PairingRequest,
};
