use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStatusLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserStatusLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserStatusLogs::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserStatusLogs::OldStatus)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserStatusLogs::NewStatus)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(UserStatusLogs::ChangedBy).uuid().not_null())
                    .col(ColumnDef::new(UserStatusLogs::Reason).text())
                    .col(
                        ColumnDef::new(UserStatusLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_status_logs_user_id")
                            .from(UserStatusLogs::Table, UserStatusLogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_user_status_logs_user_created
                ON user_status_logs (user_id, created_at DESC);
                "#,
            )
            .await?;

        // Append-only audit trail
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION reject_status_log_update()
                RETURNS TRIGGER AS $$
                BEGIN
                    RAISE EXCEPTION 'user_status_logs is append-only';
                END;
                $$ language 'plpgsql';

                CREATE TRIGGER user_status_logs_no_update
                BEFORE UPDATE ON user_status_logs
                FOR EACH ROW
                EXECUTE FUNCTION reject_status_log_update();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS user_status_logs_no_update ON user_status_logs;
                DROP FUNCTION IF EXISTS reject_status_log_update;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserStatusLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserStatusLogs {
    Table,
    Id,
    UserId,
    OldStatus,
    NewStatus,
    ChangedBy,
    Reason,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
