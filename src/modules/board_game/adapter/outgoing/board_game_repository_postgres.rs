use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::sea_orm_entity::board_games::{ActiveModel, Column, Entity};
use crate::board_game::application::domain::entities::{BggGame, BoardGame, UpsertOutcome};
use crate::board_game::application::ports::outgoing::{
    BoardGameRepository, BoardGameRepositoryError,
};

#[derive(Clone)]
pub struct BoardGameRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BoardGameRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> BoardGameRepositoryError {
        BoardGameRepositoryError::DatabaseError(e.to_string())
    }
}

/// Copies every BGG-sourced column onto `model`.
fn apply(model: &mut ActiveModel, game: BggGame) {
    model.name = Set(game.name);
    model.description = Set(game.description);
    model.image = Set(game.image);
    model.thumbnail = Set(game.thumbnail);
    model.min_players = Set(game.min_players);
    model.max_players = Set(game.max_players);
    model.playing_time = Set(game.playing_time);
    model.min_age = Set(game.min_age);
    model.categories = Set(serde_json::json!(game.categories));
    model.mechanics = Set(serde_json::json!(game.mechanics));
    model.designers = Set(serde_json::json!(game.designers));
    model.publishers = Set(serde_json::json!(game.publishers));
    model.year_published = Set(game.year_published);
    model.complexity = Set(game.complexity);
    model.rating = Set(game.rating);
    model.updated_at = Set(chrono::Utc::now().fixed_offset());
}

#[async_trait]
impl BoardGameRepository for BoardGameRepositoryPostgres {
    async fn list(&self) -> Result<Vec<BoardGame>, BoardGameRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;
        Ok(models.into_iter().map(BoardGame::from).collect())
    }

    async fn upsert(&self, game: BggGame) -> Result<UpsertOutcome, BoardGameRepositoryError> {
        let bgg_id = game.bgg_id;
        let existing = Entity::find()
            .filter(Column::BggId.eq(bgg_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                apply(&mut active, game);
                let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;
                debug!(bgg_id, "Board game updated");
                Ok(UpsertOutcome::Updated(updated.into()))
            }
            None => {
                let now = chrono::Utc::now().fixed_offset();
                let mut active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    bgg_id: Set(bgg_id),
                    created_at: Set(now),
                    ..Default::default()
                };
                apply(&mut active, game);
                let created = active.insert(&*self.db).await.map_err(Self::map_db_err)?;
                debug!(bgg_id, "Board game created");
                Ok(UpsertOutcome::Created(created.into()))
            }
        }
    }

    async fn bgg_ids(&self) -> Result<Vec<i32>, BoardGameRepositoryError> {
        Entity::find()
            .select_only()
            .column(Column::BggId)
            .order_by_asc(Column::Name)
            .into_tuple::<i32>()
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)
    }
}
