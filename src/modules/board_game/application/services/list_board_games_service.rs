use async_trait::async_trait;

use crate::board_game::application::domain::entities::BoardGame;
use crate::board_game::application::ports::incoming::use_cases::{
    ListBoardGamesError, ListBoardGamesUseCase,
};
use crate::board_game::application::ports::outgoing::BoardGameRepository;

pub struct ListBoardGamesService<R>
where
    R: BoardGameRepository,
{
    repository: R,
}

impl<R> ListBoardGamesService<R>
where
    R: BoardGameRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListBoardGamesUseCase for ListBoardGamesService<R>
where
    R: BoardGameRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<BoardGame>, ListBoardGamesError> {
        Ok(self.repository.list().await?)
    }
}
