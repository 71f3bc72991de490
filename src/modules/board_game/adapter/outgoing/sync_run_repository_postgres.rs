use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::game_sync_runs::{ActiveModel, Column, Entity, Model};
use crate::board_game::application::domain::entities::{
    GameSyncRun, SyncOutcome, SyncStatus, SyncType,
};
use crate::board_game::application::ports::outgoing::{SyncRunRepository, SyncRunRepositoryError};

#[derive(Clone)]
pub struct SyncRunRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SyncRunRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SyncRunRepositoryError {
        SyncRunRepositoryError::DatabaseError(e.to_string())
    }

    fn to_domain(m: Model) -> Result<GameSyncRun, SyncRunRepositoryError> {
        Ok(GameSyncRun {
            id: m.id,
            sync_type: m
                .sync_type
                .parse::<SyncType>()
                .map_err(SyncRunRepositoryError::DatabaseError)?,
            status: m
                .status
                .parse::<SyncStatus>()
                .map_err(SyncRunRepositoryError::DatabaseError)?,
            games_processed: m.games_processed,
            games_added: m.games_added,
            games_updated: m.games_updated,
            started_at: m.started_at.with_timezone(&chrono::Utc),
            completed_at: m.completed_at.map(|t| t.with_timezone(&chrono::Utc)),
            error: m.error,
        })
    }
}

#[async_trait]
impl SyncRunRepository for SyncRunRepositoryPostgres {
    async fn start(&self, sync_type: SyncType) -> Result<GameSyncRun, SyncRunRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            sync_type: Set(sync_type.as_str().to_string()),
            status: Set(SyncStatus::Running.as_str().to_string()),
            games_processed: Set(0),
            games_added: Set(0),
            games_updated: Set(0),
            started_at: Set(chrono::Utc::now().fixed_offset()),
            completed_at: Set(None),
            error: Set(None),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        Self::to_domain(model)
    }

    async fn finish(
        &self,
        run_id: Uuid,
        outcome: SyncOutcome,
    ) -> Result<GameSyncRun, SyncRunRepositoryError> {
        let model = Entity::find_by_id(run_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SyncRunRepositoryError::NotFound)?;

        let mut active = model.into_active_model();
        active.status = Set(outcome.status.as_str().to_string());
        active.games_processed = Set(outcome.counters.processed);
        active.games_added = Set(outcome.counters.added);
        active.games_updated = Set(outcome.counters.updated);
        active.completed_at = Set(Some(chrono::Utc::now().fixed_offset()));
        active.error = Set(outcome.error);

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Self::to_domain(updated)
    }

    async fn recent(&self, limit: u64) -> Result<Vec<GameSyncRun>, SyncRunRepositoryError> {
        Entity::find()
            .order_by_desc(Column::StartedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(Self::to_domain)
            .collect()
    }
}
