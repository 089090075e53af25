//! Ports - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from the outside world,
//! but NOT how it's actually done. That's the adapter's job.
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait KeyValueStore   │  InMemoryStore, FileStore
//! trait GameStateCodec  │  JsonGameStateCodec
//! trait Clock           │  SystemClock, FixedClock
//! ```

pub mod clock;
pub mod codec;
pub mod store;
