//! Progression - Turning a completion into experience, levels and streaks
//!
//! The progression rules are like the experience table of a TRPG:
//! 1. Reward: experience scales with daily minutes and current level
//! 2. Level: looked up on the cumulative curve, never going down
//! 3. Growth: a level up raises the daily time allowance (capped)
//! 4. Record: streak, time spent and the daily flag are stamped
//!
//! This is pure domain logic - no I/O, no clock reads, no logging.

use chrono::{DateTime, Utc};

use crate::model::game_state::GameState;
use crate::model::level_curve::{
    max_level, LEVEL_THRESHOLDS, LEVEL_UP_MINUTES_BONUS, MAX_DAILY_MINUTES, UNTABULATED_LEVEL_GAP,
};
use crate::model::objective::{Objective, ObjectiveId, ObjectiveParts};

/// Level index reached with `total_experience` on the curve
///
/// Returns the greatest index whose threshold is `<= total_experience`.
/// Experience beyond the last threshold keeps returning the last index.
pub fn level_from_experience(total_experience: u32) -> u32 {
    LEVEL_THRESHOLDS
        .iter()
        .rposition(|&threshold| threshold <= total_experience)
        .map_or(0, |index| index as u32)
}

/// Width of the level band starting at `level`
///
/// Past the tabulated curve every band is [`UNTABULATED_LEVEL_GAP`] wide.
pub fn experience_to_next(level: u32) -> u32 {
    if level >= max_level() {
        return UNTABULATED_LEVEL_GAP;
    }
    let index = level as usize;
    LEVEL_THRESHOLDS[index + 1] - LEVEL_THRESHOLDS[index]
}

/// Experience awarded for one completion: `floor(minutes / 10) + level * 5`
///
/// Stored saves depend on this exact formula. Saturates at `u32::MAX`.
pub fn experience_gain(objective: &Objective) -> u32 {
    (objective.daily_time_minutes() / 10).saturating_add(objective.level().saturating_mul(5))
}

/// A successful completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// The objective after the completion
    pub objective: Objective,
    pub experience_gained: u32,
    pub leveled_up: bool,
}

impl CompletionOutcome {
    /// Notifications for the presentation layer, in display order
    pub fn events(&self) -> Vec<ProgressionEvent> {
        let mut events = vec![ProgressionEvent::ExperienceGained {
            objective_id: self.objective.id().clone(),
            objective_name: self.objective.name().to_string(),
            amount: self.experience_gained,
        }];
        if self.leveled_up {
            events.push(ProgressionEvent::LeveledUp {
                objective_id: self.objective.id().clone(),
                objective_name: self.objective.name().to_string(),
                new_level: self.objective.level(),
            });
        }
        events
    }
}

/// Result of asking to complete an objective
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Already done today - nothing changed
    AlreadyCompleted,
    Completed(CompletionOutcome),
}

/// Events emitted by a completion
///
/// These are used for logging and UI notifications.
/// Progression itself doesn't "do" anything with these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionEvent {
    ExperienceGained {
        objective_id: ObjectiveId,
        objective_name: String,
        amount: u32,
    },
    LeveledUp {
        objective_id: ObjectiveId,
        objective_name: String,
        new_level: u32,
    },
}

/// Complete `objective` for today
///
/// Completing twice on the same day is a no-op, never a double award.
pub fn complete_objective(objective: &Objective, now: DateTime<Utc>) -> Completion {
    if objective.completed_today() {
        return Completion::AlreadyCompleted;
    }

    // Reward uses the level and minutes from before this completion.
    // Counters come from saves, so every sum saturates.
    let experience_gained = experience_gain(objective);
    let new_experience = objective.experience().saturating_add(experience_gained);
    let new_level = level_from_experience(new_experience).max(objective.level());
    let leveled_up = new_level > objective.level();

    let daily_time_minutes = if leveled_up {
        objective
            .daily_time_minutes()
            .saturating_add(LEVEL_UP_MINUTES_BONUS)
            .min(MAX_DAILY_MINUTES)
    } else {
        objective.daily_time_minutes()
    };

    let updated = Objective::restore(ObjectiveParts {
        level: new_level,
        experience: new_experience,
        experience_to_next: experience_to_next(new_level),
        daily_time_minutes,
        completed_today: true,
        // TODO: reset the streak when a day was skipped; only increments today
        streak: objective.streak().saturating_add(1),
        total_time_spent: objective
            .total_time_spent()
            .saturating_add(objective.daily_time_minutes()),
        last_completed: Some(now),
        ..objective.to_parts()
    });

    Completion::Completed(CompletionOutcome {
        objective: updated,
        experience_gained,
        leveled_up,
    })
}

/// Complete the objective `id` inside `state`
///
/// Returns `None` when the id is unknown or the objective is already
/// done today. Otherwise the new state has the objective replaced in
/// place and player stats recomputed with one more completed mission.
pub fn complete_in_state(
    state: &GameState,
    id: &ObjectiveId,
    now: DateTime<Utc>,
) -> Option<(GameState, CompletionOutcome)> {
    let current = state.find_objective(id)?;

    let outcome = match complete_objective(current, now) {
        Completion::AlreadyCompleted => return None,
        Completion::Completed(outcome) => outcome,
    };

    let objectives: Vec<Objective> = state
        .objectives()
        .iter()
        .map(|o| {
            if o.id() == id {
                outcome.objective.clone()
            } else {
                o.clone()
            }
        })
        .collect();
    let stats = state.player_stats().with_completion_recorded(&objectives);

    Some((state.with_objectives(objectives, stats), outcome))
}
