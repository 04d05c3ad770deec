//! Errors from a pairing round trip.

use crate::interchange::FormatError;
use crate::models::TournamentError;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PairingError {
    #[error("Cannot build pairing request: {0}")]
    Tournament(#[from] TournamentError),

    #[error("Malformed pairing response: {0}")]
    Format(#[from] FormatError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch pairing engine {}: {source}", executable.display())]
    Spawn {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Pairing engine exited with {}: {output}", exit_label(*code))]
    EngineFailed { code: Option<i32>, output: String },

    #[error("Pairing engine did not finish within {0:?}")]
    Timeout(Duration),
}

impl PairingError {
    /// True for failures of the engine process itself, as opposed to local I/O or bad input.
    pub fn is_engine_failure(&self) -> bool {
        matches!(
            self,
            PairingError::Spawn { .. } | PairingError::EngineFailed { .. } | PairingError::Timeout(_)
        )
    }
}

fn exit_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}
