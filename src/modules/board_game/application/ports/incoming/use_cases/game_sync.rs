use async_trait::async_trait;

use crate::board_game::application::domain::entities::{
    BggSearchResult, GameSyncRun, UpsertOutcome,
};
use crate::board_game::application::ports::outgoing::{
    BggClientError, BoardGameRepositoryError, SyncRunRepositoryError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameSyncError {
    #[error("{0}")]
    Validation(String),

    #[error("Game not found on BGG")]
    GameNotFound,

    #[error("BGG unavailable: {0}")]
    BggUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BggClientError> for GameSyncError {
    fn from(err: BggClientError) -> Self {
        GameSyncError::BggUnavailable(err.to_string())
    }
}

impl From<BoardGameRepositoryError> for GameSyncError {
    fn from(err: BoardGameRepositoryError) -> Self {
        GameSyncError::Internal(err.to_string())
    }
}

impl From<SyncRunRepositoryError> for GameSyncError {
    fn from(err: SyncRunRepositoryError) -> Self {
        GameSyncError::Internal(err.to_string())
    }
}

/// Free-text BGG lookup without touching the catalogue.
#[async_trait]
pub trait SearchBggUseCase: Send + Sync {
    async fn execute(&self, query: &str) -> Result<Vec<BggSearchResult>, GameSyncError>;
}

#[async_trait]
pub trait GameSyncUseCase: Send + Sync {
    async fn sync_single(&self, bgg_id: i32) -> Result<UpsertOutcome, GameSyncError>;

    async fn sync_search(&self, query: &str) -> Result<Vec<BggSearchResult>, GameSyncError>;

    /// Records the run and refreshes the catalogue on a detached task.
    async fn start_full_sync(&self) -> Result<GameSyncRun, GameSyncError>;

    async fn history(&self) -> Result<Vec<GameSyncRun>, GameSyncError>;
}
