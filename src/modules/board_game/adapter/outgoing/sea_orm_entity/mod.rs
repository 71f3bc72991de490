pub mod board_games;
pub mod game_sync_runs;
