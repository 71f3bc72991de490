use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Venues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Venues::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Venues::OrganizationId).uuid().not_null())
                    .col(ColumnDef::new(Venues::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Venues::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Venues::City).string_len(100))
                    .col(ColumnDef::new(Venues::State).string_len(100))
                    .col(ColumnDef::new(Venues::ZipCode).string_len(20))
                    .col(ColumnDef::new(Venues::Latitude).double())
                    .col(ColumnDef::new(Venues::Longitude).double())
                    .col(
                        ColumnDef::new(Venues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Venues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_venues_organization_id")
                            .from(Venues::Table, Venues::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
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
                CREATE INDEX IF NOT EXISTS idx_venues_organization_id
                ON venues (organization_id);

                CREATE TRIGGER update_venues_updated_at
                BEFORE UPDATE ON venues
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
            .execute_unprepared("DROP TRIGGER IF EXISTS update_venues_updated_at ON venues")
            .await?;

        manager
            .drop_table(Table::drop().table(Venues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Venues {
    Table,
    Id,
    OrganizationId,
    Name,
    Address,
    City,
    State,
    ZipCode,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
}
