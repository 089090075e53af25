//! # Questlog Use Case Layer
//!
//! Application-specific business rules.
//! This layer owns the single `GameState`, runs domain transitions on it
//! and pushes every change through the injected storage port.

pub mod error;
pub mod session;

pub use questlog_domain;

pub use error::SessionError;
pub use session::{GameSession, STORAGE_KEY};
