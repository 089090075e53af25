//! Game State Codec - Abstract (de)serialization of the aggregate
//!
//! Keeps wire formats out of the domain. Implementations must rebuild
//! timestamp fields as timestamps, not leave them as raw strings.

use crate::model::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    Encode { message: String },
    /// The stored record is malformed and cannot be trusted
    Decode { message: String },
}

impl core::fmt::Display for CodecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CodecError::Encode { message } => write!(f, "Failed to encode game state: {}", message),
            CodecError::Decode { message } => write!(f, "Malformed game state: {}", message),
        }
    }
}

impl std::error::Error for CodecError {}

pub trait GameStateCodec {
    fn encode(&self, state: &GameState) -> Result<Vec<u8>, CodecError>;

    fn decode(&self, bytes: &[u8]) -> Result<GameState, CodecError>;
}
