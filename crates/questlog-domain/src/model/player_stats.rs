//! Player statistics - aggregate derived from all objectives
//!
//! PlayerStats is a Value Object. Everything except `completed_missions`
//! and `join_date` is recomputed from the objective list after every
//! mutating transition, so it can never drift from the objectives.

use chrono::{DateTime, Utc};

use super::objective::Objective;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    /// Sum of all objective levels
    pub total_level: u32,
    /// Sum of all objective experience
    pub total_experience: u32,
    pub active_objectives: u32,
    /// Completion events ever recorded (never decreases)
    pub completed_missions: u32,
    /// Best streak across objectives, not a global streak
    pub current_streak: u32,
    pub join_date: DateTime<Utc>,
}

impl PlayerStats {
    /// Zeroed stats for a session that has not been onboarded yet
    pub fn empty(join_date: DateTime<Utc>) -> Self {
        Self {
            total_level: 0,
            total_experience: 0,
            active_objectives: 0,
            completed_missions: 0,
            current_streak: 0,
            join_date,
        }
    }

    /// Recompute the derived totals from `objectives`
    ///
    /// `completed_missions` and `join_date` are carried over unchanged.
    pub fn recomputed(&self, objectives: &[Objective]) -> Self {
        Self {
            total_level: objectives
                .iter()
                .map(Objective::level)
                .fold(0, u32::saturating_add),
            total_experience: objectives
                .iter()
                .map(Objective::experience)
                .fold(0, u32::saturating_add),
            active_objectives: objectives.len() as u32,
            completed_missions: self.completed_missions,
            current_streak: objectives.iter().map(Objective::streak).max().unwrap_or(0),
            join_date: self.join_date,
        }
    }

    /// Stats after one more completion event
    pub fn with_completion_recorded(&self, objectives: &[Objective]) -> Self {
        Self {
            completed_missions: self.completed_missions.saturating_add(1),
            ..self.recomputed(objectives)
        }
    }
}
