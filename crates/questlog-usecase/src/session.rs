//! Game Session - The lifecycle manager
//!
//! A GameSession is like the save slot of a console game:
//! 1. Open: read the slot, or start blank if it is missing or corrupt
//! 2. Start: roll over to the new day if the calendar moved
//! 3. Intents: onboarding, completions and resets replace the state
//! 4. Save: every replacement is written back, best effort
//!
//! The session exclusively owns the `GameState`. Callers only ever get a
//! shared reference to it, and change it by calling intent methods.

use questlog_domain::{
    complete_in_state, initialize_game, reset_daily_progress, Clock, GameState, GameStateCodec,
    KeyValueStore, ObjectiveId, ProgressionEvent,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::SessionError;

/// Storage key the game state lives under
pub const STORAGE_KEY: &str = "rpg-productivity-game";

/// Owner of one player's game state
pub struct GameSession<S, K, C> {
    store: S,
    codec: K,
    clock: C,
    key: String,
    state: GameState,
}

impl<S, K, C> GameSession<S, K, C>
where
    S: KeyValueStore,
    K: GameStateCodec,
    C: Clock,
{
    /// Open the session stored under [`STORAGE_KEY`]
    pub fn open(store: S, codec: K, clock: C) -> Self {
        Self::open_with_key(store, codec, clock, STORAGE_KEY)
    }

    /// Open the session stored under `key`
    ///
    /// A missing record starts a fresh game. A record that cannot be read
    /// or decoded is discarded with a warning; it is never fatal.
    pub fn open_with_key(store: S, codec: K, clock: C, key: impl Into<String>) -> Self {
        let key = key.into();
        let state = match load_state(&store, &codec, &key) {
            Ok(Some(state)) => {
                debug!(key = %key, objectives = state.objectives().len(), "Loaded game state");
                state
            }
            Ok(None) => {
                debug!(key = %key, "No saved game, starting fresh");
                GameState::fresh(clock.now(), clock.today())
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding unreadable game state");
                GameState::fresh(clock.now(), clock.today())
            }
        };

        Self {
            store,
            codec,
            clock,
            key,
            state,
        }
    }

    /// Run the start-of-session checks
    ///
    /// Onboarded games get the daily reset; a game still waiting for
    /// onboarding is left alone. Returns true if the day rolled over.
    pub fn start(&mut self) -> bool {
        if !self.state.is_initialized() {
            return false;
        }
        self.reset_daily_progress()
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========== Intents ==========

    /// Onboard the player with the selected template names
    ///
    /// Returns false (and changes nothing) for an empty selection.
    /// Running it on an already onboarded game starts over.
    pub fn initialize_game<N: AsRef<str>>(&mut self, selected: &[N]) -> bool {
        let now = self.clock.now();
        let today = self.clock.today();

        let Some(next) = initialize_game(selected, new_objective_id, now, today) else {
            debug!("Ignoring onboarding with no objectives selected");
            return false;
        };

        if self.state.is_initialized() {
            info!(
                previous_objectives = self.state.objectives().len(),
                "Replacing an existing game with a new onboarding"
            );
        }
        info!(objectives = next.objectives().len(), "Game initialized");

        self.replace(next);
        true
    }

    /// Record today's completion of objective `id`
    ///
    /// Unknown ids and objectives already completed today are silent
    /// no-ops and return no events.
    pub fn complete_objective(&mut self, id: &str) -> Vec<ProgressionEvent> {
        let id = ObjectiveId::new(id);
        let now = self.clock.now();

        let Some((next, outcome)) = complete_in_state(&self.state, &id, now) else {
            if self.state.find_objective(&id).is_none() {
                debug!(objective = %id, "Ignoring completion of unknown objective");
            } else {
                debug!(objective = %id, "Objective already completed today");
            }
            return Vec::new();
        };

        info!(
            objective = %id,
            experience = outcome.experience_gained,
            level = outcome.objective.level(),
            leveled_up = outcome.leveled_up,
            "Objective completed"
        );

        self.replace(next);
        outcome.events()
    }

    /// Clear the daily flags if the calendar day changed
    ///
    /// Returns true if anything was reset.
    pub fn reset_daily_progress(&mut self) -> bool {
        let today = self.clock.today();

        let Some(next) = reset_daily_progress(&self.state, today) else {
            return false;
        };

        info!(
            from = %self.state.last_active_date(),
            to = %today,
            "New day, daily progress reset"
        );

        self.replace(next);
        true
    }

    // ========== Persistence ==========

    /// Write the current state to the store
    pub fn persist(&mut self) -> Result<(), SessionError> {
        let bytes = self.codec.encode(&self.state)?;
        self.store.set(&self.key, &bytes)?;
        Ok(())
    }

    /// Swap in the next state, then save it
    ///
    /// A failed save is logged and the in-memory state is kept: storage
    /// catches up with the next successful save.
    fn replace(&mut self, next: GameState) {
        self.state = next;
        if let Err(e) = self.persist() {
            warn!(key = %self.key, error = %e, "Failed to save game state");
        }
    }
}

fn load_state<S, K>(store: &S, codec: &K, key: &str) -> Result<Option<GameState>, SessionError>
where
    S: KeyValueStore,
    K: GameStateCodec,
{
    match store.get(key)? {
        Some(bytes) => Ok(Some(codec.decode(&bytes)?)),
        None => Ok(None),
    }
}

fn new_objective_id() -> ObjectiveId {
    ObjectiveId::new(format!("obj-{}", Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use questlog_domain::{CodecError, StoreError};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    // ============== Test doubles ==============

    /// In-memory store that can be told to fail writes
    #[derive(Default)]
    struct MapStore {
        entries: HashMap<String, Vec<u8>>,
        fail_writes: bool,
        writes: usize,
    }

    impl KeyValueStore for MapStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
            Ok(self.entries.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::WriteFailed {
                    key: key.to_string(),
                    message: "read-only".to_string(),
                });
            }
            self.writes += 1;
            self.entries.insert(key.to_string(), value.to_vec());
            Ok(())
        }
    }

    /// Codec that keeps states in a side table and stores their index
    #[derive(Clone, Default)]
    struct TableCodec {
        table: Rc<RefCell<Vec<GameState>>>,
    }

    impl GameStateCodec for TableCodec {
        fn encode(&self, state: &GameState) -> Result<Vec<u8>, CodecError> {
            let mut table = self.table.borrow_mut();
            table.push(state.clone());
            Ok((table.len() - 1).to_string().into_bytes())
        }

        fn decode(&self, bytes: &[u8]) -> Result<GameState, CodecError> {
            let malformed = || CodecError::Decode {
                message: "unknown slot".to_string(),
            };
            let index: usize = std::str::from_utf8(bytes)
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(malformed)?;
            self.table.borrow().get(index).cloned().ok_or_else(malformed)
        }
    }

    struct StepClock {
        now: Cell<DateTime<Utc>>,
    }

    impl StepClock {
        fn new() -> Self {
            Self {
                now: Cell::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()),
            }
        }

        fn next_day(&self) {
            self.now.set(self.now.get() + Duration::days(1));
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }

        fn today(&self) -> NaiveDate {
            self.now.get().date_naive()
        }
    }

    fn first_id<S: KeyValueStore, K: GameStateCodec, C: Clock>(
        session: &GameSession<S, K, C>,
    ) -> String {
        session.state().objectives()[0].id().as_str().to_string()
    }

    // ============== Opening ==============

    #[test]
    fn test_open_without_saved_game() {
        let clock = StepClock::new();
        let session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);

        assert!(!session.state().is_initialized());
        assert_eq!(session.state().last_active_date(), clock.today());
        assert_eq!(session.state().player_stats().join_date, clock.now());
    }

    #[test]
    fn test_open_with_corrupt_record_starts_fresh() {
        let clock = StepClock::new();
        let mut store = MapStore::default();
        store.entries.insert(STORAGE_KEY.to_string(), b"{not a save".to_vec());

        let session = GameSession::open(store, TableCodec::default(), &clock);
        assert!(!session.state().is_initialized());
        assert!(session.state().objectives().is_empty());
    }

    #[test]
    fn test_reopen_restores_saved_state() {
        let clock = StepClock::new();
        let codec = TableCodec::default();
        let mut session = GameSession::open(MapStore::default(), codec.clone(), &clock);
        session.initialize_game(&["Leer"]);
        let id = first_id(&session);
        session.complete_objective(&id);
        let saved = session.state().clone();

        let GameSession { store, .. } = session;
        let reopened = GameSession::open(store, codec, &clock);
        assert_eq!(reopened.state(), &saved);
    }

    // ============== Onboarding ==============

    #[test]
    fn test_initialize_game_persists() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);

        assert!(session.initialize_game(&["Leer", "Meditación"]));
        assert!(session.state().is_initialized());
        assert_eq!(session.state().objectives().len(), 2);
        assert_eq!(session.store().writes, 1);

        let ids: Vec<&str> = session
            .state()
            .objectives()
            .iter()
            .map(|o| o.id().as_str())
            .collect();
        assert_ne!(ids[0], ids[1]);
        assert!(ids.iter().all(|id| id.starts_with("obj-")));
    }

    #[test]
    fn test_initialize_game_with_nothing_selected() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);

        let nothing: Vec<String> = Vec::new();
        assert!(!session.initialize_game(&nothing));
        assert!(!session.state().is_initialized());
        assert_eq!(session.store().writes, 0);
    }

    #[test]
    fn test_initialize_game_again_starts_over() {
        let clock = StepClock::new();
        let codec = TableCodec::default();
        let mut session = GameSession::open(MapStore::default(), codec.clone(), &clock);
        session.initialize_game(&["Leer"]);
        let id = first_id(&session);
        session.complete_objective(&id);
        assert_eq!(session.state().player_stats().completed_missions, 1);

        clock.next_day();
        assert!(session.initialize_game(&["Cocinar", "Pintar"]));

        let state = session.state();
        let names: Vec<&str> = state.objectives().iter().map(|o| o.name()).collect();
        assert_eq!(names, vec!["Cocinar", "Pintar"]);
        assert!(state.find_objective(&ObjectiveId::new(id)).is_none());
        assert!(state.objectives().iter().all(|o| o.experience() == 0));
        assert_eq!(state.player_stats().completed_missions, 0);
        assert_eq!(state.player_stats().join_date, clock.now());
        assert_eq!(state.last_active_date(), clock.today());
        assert_eq!(session.store().writes, 3);

        let expected = session.state().clone();
        let GameSession { store, .. } = session;
        let reopened = GameSession::open(store, codec, &clock);
        assert_eq!(reopened.state(), &expected);
    }

    // ============== Completion ==============

    #[test]
    fn test_complete_objective_emits_events() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);
        session.initialize_game(&["Atletismo"]);
        let id = first_id(&session);

        let events = session.complete_objective(&id);
        assert_eq!(
            events,
            vec![ProgressionEvent::ExperienceGained {
                objective_id: ObjectiveId::new(id.clone()),
                objective_name: "Atletismo".to_string(),
                amount: 8,
            }]
        );

        let objective = &session.state().objectives()[0];
        assert_eq!(objective.experience(), 8);
        assert_eq!(objective.level(), 1);
        assert_eq!(objective.streak(), 1);
        assert_eq!(objective.total_time_spent(), 30);
        assert_eq!(session.state().player_stats().completed_missions, 1);
    }

    #[test]
    fn test_complete_twice_same_day_changes_nothing() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);
        session.initialize_game(&["Leer"]);
        let id = first_id(&session);

        session.complete_objective(&id);
        let after_first = session.state().clone();
        let writes = session.store().writes;

        assert!(session.complete_objective(&id).is_empty());
        assert_eq!(session.state(), &after_first);
        assert_eq!(session.store().writes, writes);
    }

    #[test]
    fn test_complete_unknown_objective_is_noop() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);
        session.initialize_game(&["Leer"]);
        let before = session.state().clone();

        assert!(session.complete_objective("obj-missing").is_empty());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);
        session.initialize_game(&["Leer"]);
        let id = first_id(&session);

        session.store.fail_writes = true;
        let events = session.complete_objective(&id);

        assert_eq!(events.len(), 1);
        assert!(session.state().objectives()[0].completed_today());
        assert!(session.persist().is_err());
    }

    // ============== Daily rollover ==============

    #[test]
    fn test_start_resets_on_new_day() {
        let clock = StepClock::new();
        let codec = TableCodec::default();
        let mut session = GameSession::open(MapStore::default(), codec.clone(), &clock);
        session.initialize_game(&["Leer", "Cocinar"]);
        let id = first_id(&session);
        session.complete_objective(&id);

        // Same day: nothing to do
        assert!(!session.start());

        clock.next_day();
        let GameSession { store, .. } = session;
        let mut session = GameSession::open(store, codec, &clock);
        assert!(session.start());

        let state = session.state();
        assert_eq!(state.last_active_date(), clock.today());
        assert!(state.objectives().iter().all(|o| !o.completed_today()));
        assert_eq!(state.objectives()[0].streak(), 1);
        assert_eq!(state.objectives()[0].experience(), 9);

        // And the objective can be completed again
        assert_eq!(session.complete_objective(&id).len(), 1);
        assert_eq!(session.state().objectives()[0].streak(), 2);
    }

    #[test]
    fn test_start_skips_games_not_onboarded() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);
        clock.next_day();

        assert!(!session.start());
        assert_eq!(session.store().writes, 0);
    }

    #[test]
    fn test_reset_daily_progress_is_idempotent() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);
        session.initialize_game(&["Leer"]);
        clock.next_day();

        assert!(session.reset_daily_progress());
        let after_first = session.state().clone();
        assert!(!session.reset_daily_progress());
        assert_eq!(session.state(), &after_first);
    }

    #[test]
    fn test_level_up_over_simulated_days() {
        let clock = StepClock::new();
        let mut session = GameSession::open(MapStore::default(), TableCodec::default(), &clock);
        session.initialize_game(&["Atletismo"]);
        let id = first_id(&session);

        let mut level_up_days = Vec::new();
        for day in 1..=35 {
            let events = session.complete_objective(&id);
            if events
                .iter()
                .any(|e| matches!(e, ProgressionEvent::LeveledUp { new_level: 2, .. }))
            {
                level_up_days.push(day);
            }
            clock.next_day();
            session.start();
        }

        assert_eq!(level_up_days, vec![32]);
        let objective = &session.state().objectives()[0];
        assert_eq!(objective.daily_time_minutes(), 35);
        assert_eq!(objective.streak(), 35);
        assert_eq!(session.state().player_stats().completed_missions, 35);
    }
}
