//! Text interchange with the external pairing engine (TRF-style request, rank-pair response).
//!
//! The engine only knows rating ranks, never player ids; the tournament's rank map is
//! what turns its answer back into ids.

mod decode;
mod encode;
mod error;

pub use decode::decode_response;
pub use encode::{encode_request, ENGINE_POINT_CODES};
pub use error::FormatError;
