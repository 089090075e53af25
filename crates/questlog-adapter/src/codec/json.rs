//! JSON codec for the game state
//!
//! The record layout (camelCase keys, ISO-8601 timestamps, `YYYY-MM-DD`
//! day strings) matches saves written by the browser version of the game,
//! so existing saves load unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use questlog_domain::{
    CodecError, GameState, GameStateCodec, GameStateParts, Mission, MissionId, Objective,
    ObjectiveId, ObjectiveParts, PlayerStats,
};
use serde::{Deserialize, Serialize};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Stored form of a `GameState`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStateRecord {
    is_initialized: bool,
    objectives: Vec<ObjectiveRecord>,
    #[serde(default)]
    missions: Vec<MissionRecord>,
    player_stats: PlayerStatsRecord,
    last_active_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectiveRecord {
    id: String,
    name: String,
    icon: String,
    level: u32,
    experience: u32,
    experience_to_next: u32,
    daily_time_minutes: u32,
    completed_today: bool,
    streak: u32,
    total_time_spent: u32,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_completed: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerStatsRecord {
    total_level: u32,
    total_experience: u32,
    active_objectives: u32,
    completed_missions: u32,
    current_streak: u32,
    join_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MissionRecord {
    id: String,
    objective_id: String,
    title: String,
    description: String,
    time_required: u32,
    completed: bool,
    date: String,
}

/// `GameStateCodec` writing compact JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGameStateCodec;

impl JsonGameStateCodec {
    pub fn new() -> Self {
        Self
    }
}

impl GameStateCodec for JsonGameStateCodec {
    fn encode(&self, state: &GameState) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(&GameStateRecord::from(state)).map_err(|e| CodecError::Encode {
            message: e.to_string(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<GameState, CodecError> {
        let record: GameStateRecord =
            serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
                message: e.to_string(),
            })?;
        record.into_state()
    }
}

// ========== Domain -> record ==========

impl From<&GameState> for GameStateRecord {
    fn from(state: &GameState) -> Self {
        Self {
            is_initialized: state.is_initialized(),
            objectives: state.objectives().iter().map(ObjectiveRecord::from).collect(),
            missions: state.missions().iter().map(MissionRecord::from).collect(),
            player_stats: PlayerStatsRecord::from(state.player_stats()),
            last_active_date: state.last_active_date().format(DAY_FORMAT).to_string(),
        }
    }
}

impl From<&Objective> for ObjectiveRecord {
    fn from(objective: &Objective) -> Self {
        let parts = objective.to_parts();
        Self {
            id: parts.id.as_str().to_string(),
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
}

impl From<&PlayerStats> for PlayerStatsRecord {
    fn from(stats: &PlayerStats) -> Self {
        Self {
            total_level: stats.total_level,
            total_experience: stats.total_experience,
            active_objectives: stats.active_objectives,
            completed_missions: stats.completed_missions,
            current_streak: stats.current_streak,
            join_date: stats.join_date,
        }
    }
}

impl From<&Mission> for MissionRecord {
    fn from(mission: &Mission) -> Self {
        Self {
            id: mission.id.as_str().to_string(),
            objective_id: mission.objective_id.as_str().to_string(),
            title: mission.title.clone(),
            description: mission.description.clone(),
            time_required: mission.time_required,
            completed: mission.completed,
            date: mission.date.format(DAY_FORMAT).to_string(),
        }
    }
}

// ========== Record -> domain ==========

fn parse_day(field: &str, value: &str) -> Result<NaiveDate, CodecError> {
    NaiveDate::parse_from_str(value, DAY_FORMAT).map_err(|e| CodecError::Decode {
        message: format!("{} '{}': {}", field, value, e),
    })
}

impl GameStateRecord {
    fn into_state(self) -> Result<GameState, CodecError> {
        let missions = self
            .missions
            .into_iter()
            .map(MissionRecord::into_mission)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GameState::restore(GameStateParts {
            is_initialized: self.is_initialized,
            objectives: self
                .objectives
                .into_iter()
                .map(ObjectiveRecord::into_objective)
                .collect(),
            missions,
            player_stats: self.player_stats.into_stats(),
            last_active_date: parse_day("lastActiveDate", &self.last_active_date)?,
        }))
    }
}

impl ObjectiveRecord {
    fn into_objective(self) -> Objective {
        Objective::restore(ObjectiveParts {
            id: ObjectiveId::new(self.id),
            name: self.name,
            icon: self.icon,
            level: self.level,
            experience: self.experience,
            experience_to_next: self.experience_to_next,
            daily_time_minutes: self.daily_time_minutes,
            completed_today: self.completed_today,
            streak: self.streak,
            total_time_spent: self.total_time_spent,
            created_at: self.created_at,
            last_completed: self.last_completed,
        })
    }
}

impl PlayerStatsRecord {
    fn into_stats(self) -> PlayerStats {
        PlayerStats {
            total_level: self.total_level,
            total_experience: self.total_experience,
            active_objectives: self.active_objectives,
            completed_missions: self.completed_missions,
            current_streak: self.current_streak,
            join_date: self.join_date,
        }
    }
}

impl MissionRecord {
    fn into_mission(self) -> Result<Mission, CodecError> {
        Ok(Mission {
            date: parse_day("mission date", &self.date)?,
            id: MissionId::new(self.id),
            objective_id: ObjectiveId::new(self.objective_id),
            title: self.title,
            description: self.description,
            time_required: self.time_required,
            completed: self.completed,
        })
    }
}
