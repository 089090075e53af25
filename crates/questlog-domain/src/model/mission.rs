//! Mission - A dated task tied to an objective
//!
//! Reserved in the data model and persisted as part of the game state,
//! but no transition creates missions yet: `GameState::missions()` is
//! always empty in current behavior.

use chrono::NaiveDate;

use super::objective::ObjectiveId;

/// Unique identifier for a Mission
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MissionId(String);

impl MissionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub id: MissionId,
    pub objective_id: ObjectiveId,
    pub title: String,
    pub description: String,
    /// Minutes the mission asks for
    pub time_required: u32,
    pub completed: bool,
    pub date: NaiveDate,
}
