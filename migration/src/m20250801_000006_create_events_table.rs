use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Events::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Events::OrganizationId).uuid().not_null())
                    .col(ColumnDef::new(Events::VenueId).uuid())
                    .col(ColumnDef::new(Events::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Events::Description).text())
                    .col(
                        ColumnDef::new(Events::Type)
                            .string_len(20)
                            .not_null()
                            .default("PUBLIC"),
                    )
                    .col(
                        ColumnDef::new(Events::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Events::EndTime).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Events::MaxCapacity)
                            .integer()
                            .not_null()
                            .default(8),
                    )
                    .col(
                        ColumnDef::new(Events::IsRecurring)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Events::RecurrenceRule).text())
                    .col(
                        ColumnDef::new(Events::Status)
                            .string_len(20)
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(
                        ColumnDef::new(Events::GameIds)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Events::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_organization_id")
                            .from(Events::Table, Events::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_venue_id")
                            .from(Events::Table, Events::VenueId)
                            .to(Venues::Table, Venues::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE events
                ADD CONSTRAINT chk_events_type CHECK (type IN ('PUBLIC', 'PRIVATE', 'COMPETITION'));

                ALTER TABLE events
                ADD CONSTRAINT chk_events_status CHECK (status IN ('ACTIVE', 'CANCELLED', 'COMPLETED'));

                ALTER TABLE events
                ADD CONSTRAINT chk_events_capacity CHECK (max_capacity > 0);

                CREATE INDEX IF NOT EXISTS idx_events_organization_start
                ON events (organization_id, start_time);

                CREATE INDEX IF NOT EXISTS idx_events_public_active
                ON events (start_time)
                WHERE status = 'ACTIVE' AND type = 'PUBLIC';

                CREATE TRIGGER update_events_updated_at
                BEFORE UPDATE ON events
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_events_updated_at ON events")
            .await?;

        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    OrganizationId,
    VenueId,
    Title,
    Description,
    Type,
    StartTime,
    EndTime,
    MaxCapacity,
    IsRecurring,
    RecurrenceRule,
    Status,
    GameIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    Id,
}
