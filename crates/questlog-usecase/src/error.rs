//! Error types for the game session

use questlog_domain::{CodecError, StoreError};
use thiserror::Error;

/// Failure while moving the game state to or from storage
///
/// None of these are fatal to a session: loads fall back to a fresh
/// state and saves are retried with the next transition.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] CodecError),
}
