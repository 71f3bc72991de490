use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// A catalogued game. List fields are stored as JSON arrays of strings.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardGame {
    pub id: Uuid,
    pub bgg_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub playing_time: Option<i32>,
    pub min_age: Option<i32>,
    pub categories: Vec<String>,
    pub mechanics: Vec<String>,
    pub designers: Vec<String>,
    pub publishers: Vec<String>,
    pub year_published: Option<i32>,
    pub complexity: Option<f64>,
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Game details as parsed from a BGG `thing` document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BggGame {
    pub bgg_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub thumbnail: Option<String>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
    pub playing_time: Option<i32>,
    pub min_age: Option<i32>,
    pub categories: Vec<String>,
    pub mechanics: Vec<String>,
    pub designers: Vec<String>,
    pub publishers: Vec<String>,
    pub year_published: Option<i32>,
    pub complexity: Option<f64>,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BggSearchResult {
    pub bgg_id: i32,
    pub name: String,
    pub year_published: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created(BoardGame),
    Updated(BoardGame),
}

impl UpsertOutcome {
    pub fn game(&self) -> &BoardGame {
        match self {
            UpsertOutcome::Created(game) | UpsertOutcome::Updated(game) => game,
        }
    }

    pub fn into_game(self) -> BoardGame {
        match self {
            UpsertOutcome::Created(game) | UpsertOutcome::Updated(game) => game,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    Single,
    Search,
    Full,
}

impl SyncType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncType::Single => "single",
            SyncType::Search => "search",
            SyncType::Full => "full",
        }
    }
}

impl FromStr for SyncType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(SyncType::Single),
            "search" => Ok(SyncType::Search),
            "full" => Ok(SyncType::Full),
            other => Err(format!("Invalid sync type: {other}")),
        }
    }
}

impl fmt::Display for SyncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Running,
    Completed,
    Failed,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncStatus::Running => "running",
            SyncStatus::Completed => "completed",
            SyncStatus::Failed => "failed",
        }
    }
}

impl FromStr for SyncStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(SyncStatus::Running),
            "completed" => Ok(SyncStatus::Completed),
            "failed" => Ok(SyncStatus::Failed),
            other => Err(format!("Invalid sync status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncCounters {
    pub processed: i32,
    pub added: i32,
    pub updated: i32,
}

impl SyncCounters {
    pub fn record(&mut self, outcome: &UpsertOutcome) {
        self.processed += 1;
        match outcome {
            UpsertOutcome::Created(_) => self.added += 1,
            UpsertOutcome::Updated(_) => self.updated += 1,
        }
    }
}

/// How a sync run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome {
    pub counters: SyncCounters,
    pub status: SyncStatus,
    pub error: Option<String>,
}

impl SyncOutcome {
    pub fn completed(counters: SyncCounters) -> Self {
        Self {
            counters,
            status: SyncStatus::Completed,
            error: None,
        }
    }

    pub fn failed(counters: SyncCounters, error: impl Into<String>) -> Self {
        Self {
            counters,
            status: SyncStatus::Failed,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSyncRun {
    pub id: Uuid,
    pub sync_type: SyncType,
    pub status: SyncStatus,
    pub games_processed: i32,
    pub games_added: i32,
    pub games_updated: i32,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}
