pub mod game_sync_service;
pub mod list_board_games_service;

pub use game_sync_service::{refresh_catalogue, GameSyncService, SearchBggService};
pub use list_board_games_service::ListBoardGamesService;
