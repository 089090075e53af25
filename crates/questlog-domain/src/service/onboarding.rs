//! Onboarding - Turning selected template names into a started game
//!
//! Unknown names never fail onboarding: they get the default icon and
//! daily minutes from the template module.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::game_state::GameState;
use crate::model::objective::{Objective, ObjectiveId, ObjectiveParts};
use crate::model::player_stats::PlayerStats;
use crate::model::template::ObjectiveTemplate;
use crate::service::progression::experience_to_next;

/// Level every new objective starts at
pub const STARTING_LEVEL: u32 = 1;

/// A level-1 objective for the template `name`
pub fn new_objective(id: ObjectiveId, name: &str, now: DateTime<Utc>) -> Objective {
    Objective::restore(ObjectiveParts {
        id,
        name: name.to_string(),
        icon: ObjectiveTemplate::icon_for(name).to_string(),
        level: STARTING_LEVEL,
        experience: 0,
        experience_to_next: experience_to_next(STARTING_LEVEL),
        daily_time_minutes: ObjectiveTemplate::base_minutes_for(name),
        completed_today: false,
        streak: 0,
        total_time_spent: 0,
        created_at: now,
        last_completed: None,
    })
}

/// Build an initialized game from the selected names
///
/// Duplicate names keep their first position. `next_id` is called once
/// per objective created. Returns `None` for an empty selection rather
/// than producing an initialized game with no objectives.
pub fn initialize_game<S, F>(
    selected: &[S],
    mut next_id: F,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> Option<GameState>
where
    S: AsRef<str>,
    F: FnMut() -> ObjectiveId,
{
    let mut names: Vec<&str> = Vec::with_capacity(selected.len());
    for name in selected.iter().map(AsRef::as_ref) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    if names.is_empty() {
        return None;
    }

    let objectives: Vec<Objective> = names
        .into_iter()
        .map(|name| new_objective(next_id(), name, now))
        .collect();
    let stats = PlayerStats::empty(now).recomputed(&objectives);

    Some(GameState::initialized(objectives, stats, today))
}
