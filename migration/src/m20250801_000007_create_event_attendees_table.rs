use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventAttendees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventAttendees::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(EventAttendees::EventId).uuid().not_null())
                    .col(ColumnDef::new(EventAttendees::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(EventAttendees::Status)
                            .string_len(20)
                            .not_null()
                            .default("ATTENDING"),
                    )
                    .col(
                        ColumnDef::new(EventAttendees::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendees_event_id")
                            .from(EventAttendees::Table, EventAttendees::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendees_user_id")
                            .from(EventAttendees::Table, EventAttendees::UserId)
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
                CREATE UNIQUE INDEX IF NOT EXISTS idx_event_attendees_event_user
                ON event_attendees (event_id, user_id);

                CREATE INDEX IF NOT EXISTS idx_event_attendees_user_id
                ON event_attendees (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventAttendees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventAttendees {
    Table,
    Id,
    EventId,
    UserId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
