//! Errors decoding a pairing response.

/// The response document could not be read back into pairs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// No non-blank line to read the round number from.
    EmptyDocument,
    /// Round line is not an integer.
    InvalidRound(String),
    /// A rank token is not an integer.
    InvalidRank(String),
    /// Pair line with fewer than two tokens (1-based line number).
    MissingRank { line: usize },
    /// Rank with no player behind it.
    UnknownRank(usize),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::EmptyDocument => write!(f, "Empty pairing response"),
            FormatError::InvalidRound(token) => write!(f, "Invalid round information: {}", token),
            FormatError::InvalidRank(token) => write!(f, "Invalid rank: {}", token),
            FormatError::MissingRank { line } => write!(f, "Line {} needs two ranks", line),
            FormatError::UnknownRank(rank) => write!(f, "No player at rank {}", rank),
        }
    }
}

impl std::error::Error for FormatError {}
