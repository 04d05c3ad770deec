//! Boundary to the external pairing engine.

mod config;
mod engine;
mod error;
mod gateway;

pub use config::PairingConfig;
pub use engine::{BbpPairingsEngine, PairingEngine};
pub use error::PairingError;
pub use gateway::{fetch_pairs, PairingRequest};
