//! Daily Reset - Rolling the game over to a new calendar day
//!
//! Only the "completed today" flags reset. Experience, levels, streaks
//! and time spent carry over untouched.

use chrono::NaiveDate;

use crate::model::game_state::GameState;
use crate::model::objective::Objective;

/// Clear every daily flag if `today` differs from the last active day
///
/// Returns `None` when `today` is the last active day (nothing to do),
/// so calling it repeatedly within one day changes nothing.
pub fn reset_daily_progress(state: &GameState, today: NaiveDate) -> Option<GameState> {
    if state.last_active_date() == today {
        return None;
    }

    let objectives = state
        .objectives()
        .iter()
        .map(Objective::with_daily_flag_cleared)
        .collect();

    Some(state.with_last_active_date(objectives, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::objective::{ObjectiveId, ObjectiveParts};
    use crate::model::player_stats::PlayerStats;
    use chrono::{DateTime, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn objective(id: &str, completed_today: bool) -> Objective {
        Objective::restore(ObjectiveParts {
            id: ObjectiveId::new(id),
            name: id.to_string(),
            icon: "⭐".to_string(),
            level: 2,
            experience: 300,
            experience_to_next: 200,
            daily_time_minutes: 35,
            completed_today,
            streak: 12,
            total_time_spent: 400,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            last_completed: None,
        })
    }

    fn state_on(date: NaiveDate) -> GameState {
        let objectives = vec![objective("a", true), objective("b", false)];
        let stats = PlayerStats::empty(DateTime::<Utc>::UNIX_EPOCH).recomputed(&objectives);
        GameState::initialized(objectives, stats, date)
    }

    #[test]
    fn test_same_day_is_noop() {
        assert!(reset_daily_progress(&state_on(day(1)), day(1)).is_none());
    }

    #[test]
    fn test_new_day_clears_flags_only() {
        let before = state_on(day(1));
        let after = reset_daily_progress(&before, day(2)).unwrap();

        assert_eq!(after.last_active_date(), day(2));
        assert!(after.objectives().iter().all(|o| !o.completed_today()));
        for (old, new) in before.objectives().iter().zip(after.objectives()) {
            assert_eq!(old.experience(), new.experience());
            assert_eq!(old.streak(), new.streak());
            assert_eq!(old.total_time_spent(), new.total_time_spent());
            assert_eq!(old.level(), new.level());
        }
        assert_eq!(after.player_stats(), before.player_stats());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let once = reset_daily_progress(&state_on(day(1)), day(2)).unwrap();
        assert!(reset_daily_progress(&once, day(2)).is_none());
    }

    #[test]
    fn test_going_back_a_day_still_resets() {
        // Day strings are compared for equality, not ordering
        let after = reset_daily_progress(&state_on(day(5)), day(4)).unwrap();
        assert_eq!(after.last_active_date(), day(4));
    }
}
