use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameSyncRuns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameSyncRuns::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GameSyncRuns::SyncType).string_len(16).not_null())
                    .col(ColumnDef::new(GameSyncRuns::Status).string_len(16).not_null())
                    .col(
                        ColumnDef::new(GameSyncRuns::GamesProcessed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GameSyncRuns::GamesAdded)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GameSyncRuns::GamesUpdated)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(GameSyncRuns::StartedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(GameSyncRuns::CompletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(GameSyncRuns::Error).text())
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_game_sync_runs_started_at
                ON game_sync_runs (started_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameSyncRuns::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GameSyncRuns {
    Table,
    Id,
    SyncType,
    Status,
    GamesProcessed,
    GamesAdded,
    GamesUpdated,
    StartedAt,
    CompletedAt,
    Error,
}
