use async_trait::async_trait;

use crate::board_game::application::domain::entities::BoardGame;
use crate::board_game::application::ports::outgoing::BoardGameRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListBoardGamesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<BoardGameRepositoryError> for ListBoardGamesError {
    fn from(err: BoardGameRepositoryError) -> Self {
        match err {
            BoardGameRepositoryError::DatabaseError(msg) => ListBoardGamesError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListBoardGamesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BoardGame>, ListBoardGamesError>;
}
