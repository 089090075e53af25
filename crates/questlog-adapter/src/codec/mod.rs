//! Codecs - GameStateCodec implementations
//!
//! These implement the codec port from questlog-domain.

pub mod json;
