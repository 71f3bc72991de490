use async_trait::async_trait;

use crate::board_game::application::domain::entities::{BggGame, BoardGame, UpsertOutcome};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardGameRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BoardGameRepository: Send + Sync {
    /// Whole catalogue ordered by name.
    async fn list(&self) -> Result<Vec<BoardGame>, BoardGameRepositoryError>;

    /// Inserts or refreshes the row keyed by `bgg_id`.
    async fn upsert(&self, game: BggGame) -> Result<UpsertOutcome, BoardGameRepositoryError>;

    async fn bgg_ids(&self) -> Result<Vec<i32>, BoardGameRepositoryError>;
}
