pub mod bgg_client;
pub mod board_game_repository;
pub mod sync_run_repository;

pub use bgg_client::{BggClient, BggClientError};
pub use board_game_repository::{BoardGameRepository, BoardGameRepositoryError};
pub use sync_run_repository::{SyncRunRepository, SyncRunRepositoryError};
