//! # Questlog Adapter Layer
//!
//! Implementations of the domain ports (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `clock/` - Wall-clock and fixed time sources
//! - `codec/` - Game state wire formats
//! - `repository/` - Key-value store implementations

pub mod clock;
pub mod codec;
pub mod repository;

pub use clock::{FixedClock, SystemClock};
pub use codec::json::JsonGameStateCodec;
pub use repository::file_system::FileStore;
pub use repository::in_memory::InMemoryStore;
