//! Objective - A tracked daily habit with its own progression
//!
//! Objective is an Entity (has identity). The `id` is assigned once at
//! onboarding and never reused, even if every other field changes.
//!
//! Objectives are immutable values: progression services read one and
//! hand back a new one. Use [`Objective::to_parts`] / [`Objective::restore`]
//! to move between the entity and its plain record form.

use chrono::{DateTime, Utc};

/// Unique identifier for an Objective
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectiveId(String);

impl ObjectiveId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ObjectiveId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Badge tier shown next to an objective's level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LevelTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LevelTier {
    pub fn from_level(level: u32) -> Self {
        match level {
            10.. => LevelTier::Platinum,
            7..=9 => LevelTier::Gold,
            4..=6 => LevelTier::Silver,
            _ => LevelTier::Bronze,
        }
    }
}

impl core::fmt::Display for LevelTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            LevelTier::Bronze => "bronze",
            LevelTier::Silver => "silver",
            LevelTier::Gold => "gold",
            LevelTier::Platinum => "platinum",
        };
        f.pad(name)
    }
}

/// Plain record form of an [`Objective`]
///
/// Used by services to build the next value and by codecs to rebuild
/// objectives from storage. No invariants are checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectiveParts {
    pub id: ObjectiveId,
    pub name: String,
    pub icon: String,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub daily_time_minutes: u32,
    pub completed_today: bool,
    pub streak: u32,
    pub total_time_spent: u32,
    pub created_at: DateTime<Utc>,
    pub last_completed: Option<DateTime<Utc>>,
}

/// Objective - one habit the player is levelling up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective {
    id: ObjectiveId,
    name: String,
    icon: String,
    /// Current level (starts at 1, never decreases)
    level: u32,
    /// Cumulative experience (never decreases)
    experience: u32,
    /// Cached gap to the next level boundary
    experience_to_next: u32,
    /// Recommended minutes per day
    daily_time_minutes: u32,
    completed_today: bool,
    streak: u32,
    /// Cumulative minutes, in whole minutes
    total_time_spent: u32,
    created_at: DateTime<Utc>,
    last_completed: Option<DateTime<Utc>>,
}

impl Objective {
    /// Rebuild an objective from its record form
    pub fn restore(parts: ObjectiveParts) -> Self {
        Self {
            id: parts.id,
            name: parts.name,
            icon: parts.icon,
            level: parts.level,
            experience: parts.experience,
            experience_to_next: parts.experience_to_next,
            daily_time_minutes: parts.daily_time_minutes,
            completed_today: parts.completed_today,
            streak: parts.streak,
            total_time_spent: parts.total_time_spent,
            created_at: parts.created_at,
            last_completed: parts.last_completed,
        }
    }

    /// Copy this objective into its record form
    pub fn to_parts(&self) -> ObjectiveParts {
        ObjectiveParts {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            level: self.level,
            experience: self.experience,
            experience_to_next: self.experience_to_next,
            daily_time_minutes: self.daily_time_minutes,
            completed_today: self.completed_today,
            streak: self.streak,
            total_time_spent: self.total_time_spent,
            created_at: self.created_at,
            last_completed: self.last_completed,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &ObjectiveId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn experience_to_next(&self) -> u32 {
        self.experience_to_next
    }

    pub fn daily_time_minutes(&self) -> u32 {
        self.daily_time_minutes
    }

    pub fn completed_today(&self) -> bool {
        self.completed_today
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn total_time_spent(&self) -> u32 {
        self.total_time_spent
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_completed(&self) -> Option<DateTime<Utc>> {
        self.last_completed
    }

    // ========== Derived views ==========

    pub fn tier(&self) -> LevelTier {
        LevelTier::from_level(self.level)
    }

    /// Share of the way through the current level bar, 0.0..=100.0
    pub fn progress_percent(&self) -> f64 {
        let span = u64::from(self.experience) + u64::from(self.experience_to_next);
        if span == 0 {
            return 0.0;
        }
        f64::from(self.experience) / span as f64 * 100.0
    }

    /// Copy of this objective with the daily flag cleared
    pub(crate) fn with_daily_flag_cleared(&self) -> Self {
        Self {
            completed_today: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> ObjectiveParts {
        ObjectiveParts {
            id: ObjectiveId::new("obj-1"),
            name: "Leer".to_string(),
            icon: "📖".to_string(),
            level: 1,
            experience: 0,
            experience_to_next: 150,
            daily_time_minutes: 45,
            completed_today: false,
            streak: 0,
            total_time_spent: 0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            last_completed: None,
        }
    }

    #[test]
    fn test_restore_round_trips_parts() {
        let p = parts();
        let objective = Objective::restore(p.clone());
        assert_eq!(objective.to_parts(), p);
        assert_eq!(objective.id().as_str(), "obj-1");
        assert_eq!(objective.name(), "Leer");
    }

    #[test]
    fn test_level_tiers() {
        assert_eq!(LevelTier::from_level(0), LevelTier::Bronze);
        assert_eq!(LevelTier::from_level(3), LevelTier::Bronze);
        assert_eq!(LevelTier::from_level(4), LevelTier::Silver);
        assert_eq!(LevelTier::from_level(6), LevelTier::Silver);
        assert_eq!(LevelTier::from_level(7), LevelTier::Gold);
        assert_eq!(LevelTier::from_level(9), LevelTier::Gold);
        assert_eq!(LevelTier::from_level(10), LevelTier::Platinum);
        assert_eq!(LevelTier::from_level(14), LevelTier::Platinum);
    }

    #[test]
    fn test_progress_percent() {
        let objective = Objective::restore(ObjectiveParts {
            experience: 50,
            experience_to_next: 150,
            ..parts()
        });
        assert!((objective.progress_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_percent_with_empty_span() {
        let objective = Objective::restore(ObjectiveParts {
            experience: 0,
            experience_to_next: 0,
            ..parts()
        });
        assert_eq!(objective.progress_percent(), 0.0);
    }

    #[test]
    fn test_clearing_daily_flag_keeps_progress() {
        let objective = Objective::restore(ObjectiveParts {
            completed_today: true,
            streak: 4,
            experience: 32,
            ..parts()
        });
        let cleared = objective.with_daily_flag_cleared();
        assert!(!cleared.completed_today());
        assert_eq!(cleared.streak(), 4);
        assert_eq!(cleared.experience(), 32);
    }
}
