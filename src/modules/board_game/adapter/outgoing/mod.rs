pub mod bgg;
pub mod board_game_repository_postgres;
pub mod sea_orm_entity;
pub mod sync_run_repository_postgres;

pub use bgg::BggHttpClient;
pub use board_game_repository_postgres::BoardGameRepositoryPostgres;
pub use sync_run_repository_postgres::SyncRunRepositoryPostgres;
