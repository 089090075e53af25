//! GameState - The aggregate root
//!
//! A single GameState is the source of truth for one player. It is created
//! empty, initialized once by onboarding, and afterwards only replaced by
//! the completion and daily-reset transitions in `service/`.
//!
//! Invariant: `player_stats` totals always match `objectives`.

use chrono::{DateTime, NaiveDate, Utc};

use super::mission::Mission;
use super::objective::{Objective, ObjectiveId};
use super::player_stats::PlayerStats;

/// Plain record form of a [`GameState`], used when loading from storage
#[derive(Debug, Clone, PartialEq)]
pub struct GameStateParts {
    pub is_initialized: bool,
    pub objectives: Vec<Objective>,
    pub missions: Vec<Mission>,
    pub player_stats: PlayerStats,
    pub last_active_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// False until onboarding completes
    is_initialized: bool,
    /// Creation order is display order
    objectives: Vec<Objective>,
    missions: Vec<Mission>,
    player_stats: PlayerStats,
    /// Calendar day of the last daily-reset check
    last_active_date: NaiveDate,
}

impl GameState {
    /// A state that has not been through onboarding yet
    pub fn fresh(now: DateTime<Utc>, today: NaiveDate) -> Self {
        Self {
            is_initialized: false,
            objectives: Vec::new(),
            missions: Vec::new(),
            player_stats: PlayerStats::empty(now),
            last_active_date: today,
        }
    }

    /// Rebuild a state from storage, exactly as recorded
    pub fn restore(parts: GameStateParts) -> Self {
        Self {
            is_initialized: parts.is_initialized,
            objectives: parts.objectives,
            missions: parts.missions,
            player_stats: parts.player_stats,
            last_active_date: parts.last_active_date,
        }
    }

    pub(crate) fn initialized(
        objectives: Vec<Objective>,
        player_stats: PlayerStats,
        today: NaiveDate,
    ) -> Self {
        Self {
            is_initialized: true,
            objectives,
            missions: Vec::new(),
            player_stats,
            last_active_date: today,
        }
    }

    pub(crate) fn with_objectives(&self, objectives: Vec<Objective>, player_stats: PlayerStats) -> Self {
        Self {
            objectives,
            player_stats,
            ..self.clone()
        }
    }

    pub(crate) fn with_last_active_date(&self, objectives: Vec<Objective>, today: NaiveDate) -> Self {
        Self {
            objectives,
            last_active_date: today,
            ..self.clone()
        }
    }

    // ========== Getters ==========

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn player_stats(&self) -> &PlayerStats {
        &self.player_stats
    }

    pub fn last_active_date(&self) -> NaiveDate {
        self.last_active_date
    }

    // ========== Queries ==========

    pub fn find_objective(&self, id: &ObjectiveId) -> Option<&Objective> {
        self.objectives.iter().find(|o| o.id() == id)
    }

    /// Today's progress as shown on the dashboard
    pub fn daily_summary(&self) -> DailySummary {
        let completed_today = self.objectives.iter().filter(|o| o.completed_today()).count();
        let total_minutes: u64 = self
            .objectives
            .iter()
            .map(|o| u64::from(o.total_time_spent()))
            .sum();

        DailySummary {
            completed_today,
            total_objectives: self.objectives.len(),
            total_hours_spent: total_minutes / 60,
        }
    }
}

/// How far through today's objectives the player is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayProgress {
    NotStarted,
    InProgress,
    AllComplete,
}

/// Read model of a day's completion, derived from a [`GameState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySummary {
    pub completed_today: usize,
    pub total_objectives: usize,
    /// Whole hours across all objectives, rounded down
    pub total_hours_spent: u64,
}

impl DailySummary {
    pub fn completion_percent(&self) -> f64 {
        if self.total_objectives == 0 {
            return 0.0;
        }
        self.completed_today as f64 / self.total_objectives as f64 * 100.0
    }

    pub fn progress(&self) -> DayProgress {
        if self.total_objectives > 0 && self.completed_today == self.total_objectives {
            DayProgress::AllComplete
        } else if self.completed_today > 0 {
            DayProgress::InProgress
        } else {
            DayProgress::NotStarted
        }
    }
}
