//! # Questlog Domain Layer
//!
//! The heart of Questlog - daily habits modelled as RPG progression.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities, value objects, static tables        ││
//! │  │  repository/- Port definitions (not implementations)        ││
//! │  │  service/   - Progression, daily reset, onboarding          ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **Every transition here is a pure function.**
//!
//! Services take the current value and hand back a new one. Storage,
//! serialization and wall-clock time arrive through the ports in
//! `repository/` and are wired up by outer layers.

pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    game_state::{DailySummary, DayProgress, GameState, GameStateParts},
    level_curve::{LEVEL_THRESHOLDS, MAX_DAILY_MINUTES, UNTABULATED_LEVEL_GAP},
    mission::{Mission, MissionId},
    objective::{LevelTier, Objective, ObjectiveId, ObjectiveParts},
    player_stats::PlayerStats,
    template::{ObjectiveTemplate, OBJECTIVE_TEMPLATES},
};

pub use repository::{
    clock::Clock,
    codec::{CodecError, GameStateCodec},
    store::{KeyValueStore, StoreError},
};

pub use service::{
    daily_reset::reset_daily_progress,
    onboarding::{initialize_game, new_objective},
    progression::{
        complete_in_state, complete_objective, experience_gain, experience_to_next,
        level_from_experience, Completion, CompletionOutcome, ProgressionEvent,
    },
};
