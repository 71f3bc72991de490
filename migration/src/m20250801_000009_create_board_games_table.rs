use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardGames::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BoardGames::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(BoardGames::BggId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BoardGames::Name).string_len(255).not_null())
                    .col(ColumnDef::new(BoardGames::Description).text())
                    .col(ColumnDef::new(BoardGames::Image).text())
                    .col(ColumnDef::new(BoardGames::Thumbnail).text())
                    .col(ColumnDef::new(BoardGames::MinPlayers).integer())
                    .col(ColumnDef::new(BoardGames::MaxPlayers).integer())
                    .col(ColumnDef::new(BoardGames::PlayingTime).integer())
                    .col(ColumnDef::new(BoardGames::MinAge).integer())
                    .col(
                        ColumnDef::new(BoardGames::Categories)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(BoardGames::Mechanics)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(BoardGames::Designers)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(BoardGames::Publishers)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(BoardGames::YearPublished).integer())
                    .col(ColumnDef::new(BoardGames::Complexity).double())
                    .col(ColumnDef::new(BoardGames::Rating).double())
                    .col(
                        ColumnDef::new(BoardGames::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(BoardGames::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_board_games_name
                ON board_games (name);

                CREATE INDEX IF NOT EXISTS idx_board_games_created_at
                ON board_games (created_at DESC);

                CREATE TRIGGER update_board_games_updated_at
                BEFORE UPDATE ON board_games
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
                "DROP TRIGGER IF EXISTS update_board_games_updated_at ON board_games",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BoardGames::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BoardGames {
    Table,
    Id,
    BggId,
    Name,
    Description,
    Image,
    Thumbnail,
    MinPlayers,
    MaxPlayers,
    PlayingTime,
    MinAge,
    Categories,
    Mechanics,
    Designers,
    Publishers,
    YearPublished,
    Complexity,
    Rating,
    CreatedAt,
    UpdatedAt,
}
