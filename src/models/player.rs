//! Player, per-game results and the score-code vocabulary.

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier for a participant.
pub type PlayerId = String;

/// Reserved opponent id for a bye. Never a real participant; always rating-rank 0.
pub const BYE_ID: &str = "FFFFFFFFFFFF";

/// True if `id` is the bye sentinel.
pub fn is_bye_id(id: &str) -> bool {
    id == BYE_ID
}

/// Color a player had in a game. Byes are recorded as White.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Single-letter tag used in the interchange document.
    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Internal score codes and what each is worth.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCode {
    Win,
    Draw,
    Loss,
    Bye,
    Forfeit,
}

impl ScoreCode {
    pub fn value(self) -> f64 {
        match self {
            ScoreCode::Win => 1.0,
            ScoreCode::Draw => 0.5,
            ScoreCode::Loss => 0.0,
            ScoreCode::Bye => 1.0,
            ScoreCode::Forfeit => -1.0,
        }
    }

    /// Code written into the game history columns.
    pub fn code(self) -> &'static str {
        match self {
            ScoreCode::Win => "1",
            ScoreCode::Draw => "=",
            ScoreCode::Loss => "0",
            ScoreCode::Bye => "+",
            ScoreCode::Forfeit => "-",
        }
    }
}

/// One entry in a player's history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub opponent: PlayerId,
    pub color: Color,
    pub score: ScoreCode,
}

impl GameResult {
    pub fn is_bye(&self) -> bool {
        is_bye_id(&self.opponent)
    }
}

/// A registered participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub rating: i32,
    /// Always the sum of `results` score values; only `push_result` changes it.
    pub points: f64,
    /// 1-based position in the rating ranking (0 until the tournament starts).
    pub rating_pos: usize,
    /// 1-based position in the points ranking (0 until the tournament starts).
    pub points_pos: usize,
    /// Registration order, the last tie-break key.
    pub registration_index: usize,
    pub results: Vec<GameResult>,
}

impl Player {
    /// Create a new player with zero points and an empty history.
    pub fn new(id: impl Into<PlayerId>, rating: i32, registration_index: usize) -> Self {
        Self {
            id: id.into(),
            rating,
            points: 0.0,
            rating_pos: 0,
            points_pos: 0,
            registration_index,
            results: Vec::new(),
        }
    }

    /// Append a result and add its value to the running total.
    pub(crate) fn push_result(&mut self, opponent: PlayerId, color: Color, score: ScoreCode) {
        self.results.push(GameResult {
            opponent,
            color,
            score,
        });
        self.points += score.value();
    }

    /// What this player scored against `opponent`, summed over every game between them.
    /// `None` if they never met.
    pub fn score_against(&self, opponent: &str) -> Option<f64> {
        self.results
            .iter()
            .filter(|r| r.opponent == opponent)
            .map(|r| r.score.value())
            .fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
    }

    /// Sum of the history, recomputed from scratch.
    pub fn history_points(&self) -> f64 {
        self.results.iter().map(|r| r.score.value()).sum()
    }
}
