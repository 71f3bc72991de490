use async_trait::async_trait;
use uuid::Uuid;

use crate::board_game::application::domain::entities::{GameSyncRun, SyncOutcome, SyncType};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyncRunRepositoryError {
    #[error("Sync run not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SyncRunRepository: Send + Sync {
    /// Records a new run in `running` state.
    async fn start(&self, sync_type: SyncType) -> Result<GameSyncRun, SyncRunRepositoryError>;

    async fn finish(
        &self,
        run_id: Uuid,
        outcome: SyncOutcome,
    ) -> Result<GameSyncRun, SyncRunRepositoryError>;

    /// Newest first.
    async fn recent(&self, limit: u64) -> Result<Vec<GameSyncRun>, SyncRunRepositoryError>;
}
