pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_organizations_table;
mod m20250801_000002_create_users_table;
mod m20250801_000003_create_sessions_table;
mod m20250801_000004_create_user_status_logs_table;
mod m20250801_000005_create_venues_table;
mod m20250801_000006_create_events_table;
mod m20250801_000007_create_event_attendees_table;
mod m20250801_000008_create_followers_table;
mod m20250801_000009_create_board_games_table;
mod m20250801_000010_create_game_sync_runs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_organizations_table::Migration),
            Box::new(m20250801_000002_create_users_table::Migration),
            Box::new(m20250801_000003_create_sessions_table::Migration),
            Box::new(m20250801_000004_create_user_status_logs_table::Migration),
            Box::new(m20250801_000005_create_venues_table::Migration),
            Box::new(m20250801_000006_create_events_table::Migration),
            Box::new(m20250801_000007_create_event_attendees_table::Migration),
            Box::new(m20250801_000008_create_followers_table::Migration),
            Box::new(m20250801_000009_create_board_games_table::Migration),
            Box::new(m20250801_000010_create_game_sync_runs_table::Migration),
        ]
    }
}
