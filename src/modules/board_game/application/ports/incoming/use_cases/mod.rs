pub mod game_sync;
pub mod list_board_games;

pub use game_sync::{GameSyncError, GameSyncUseCase, SearchBggUseCase};
pub use list_board_games::{ListBoardGamesError, ListBoardGamesUseCase};
