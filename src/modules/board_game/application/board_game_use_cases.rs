use std::sync::Arc;

use crate::board_game::application::ports::incoming::use_cases::{
    GameSyncUseCase, ListBoardGamesUseCase, SearchBggUseCase,
};

#[derive(Clone)]
pub struct BoardGameUseCases {
    pub list: Arc<dyn ListBoardGamesUseCase + Send + Sync>,
    pub search_bgg: Arc<dyn SearchBggUseCase + Send + Sync>,
    pub sync: Arc<dyn GameSyncUseCase + Send + Sync>,
}
