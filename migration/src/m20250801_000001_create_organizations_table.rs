use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shared by every table that carries updated_at
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Organizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organizations::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Organizations::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Organizations::Description).text())
                    .col(ColumnDef::new(Organizations::Address).string_len(255))
                    .col(ColumnDef::new(Organizations::City).string_len(100))
                    .col(ColumnDef::new(Organizations::State).string_len(100))
                    .col(ColumnDef::new(Organizations::ZipCode).string_len(20))
                    .col(ColumnDef::new(Organizations::Phone).string_len(50))
                    .col(ColumnDef::new(Organizations::Email).string_len(255))
                    .col(ColumnDef::new(Organizations::Website).text())
                    .col(ColumnDef::new(Organizations::Logo).text())
                    .col(ColumnDef::new(Organizations::BannerImage).text())
                    .col(ColumnDef::new(Organizations::Latitude).double())
                    .col(ColumnDef::new(Organizations::Longitude).double())
                    .col(
                        ColumnDef::new(Organizations::AllowMultiVenue)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Organizations::EnableFollowers)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Organizations::EnablePublicEvents)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Organizations::EnableMessaging)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Organizations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Organizations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_organizations_name
                ON organizations (name);

                CREATE INDEX IF NOT EXISTS idx_organizations_created_at
                ON organizations (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_organizations_updated_at
                BEFORE UPDATE ON organizations
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
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_organizations_updated_at ON organizations",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Organizations::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Organizations {
    Table,
    Id,
    Name,
    Description,
    Address,
    City,
    State,
    ZipCode,
    Phone,
    Email,
    Website,
    Logo,
    BannerImage,
    Latitude,
    Longitude,
    AllowMultiVenue,
    EnableFollowers,
    EnablePublicEvents,
    EnableMessaging,
    CreatedAt,
    UpdatedAt,
}
