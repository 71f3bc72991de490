use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::user_status_logs::{
    ActiveModel as StatusLogActiveModel, Column as StatusLogColumn, Entity as StatusLogEntity,
};
use crate::auth::application::domain::entities::StatusLog;
use crate::auth::application::ports::outgoing::status_log_repository::{
    StatusLogRepository, StatusLogRepositoryError,
};

#[derive(Clone, Debug)]
pub struct StatusLogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatusLogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatusLogRepository for StatusLogRepositoryPostgres {
    async fn append(&self, entry: StatusLog) -> Result<StatusLog, StatusLogRepositoryError> {
        let active = StatusLogActiveModel {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            old_status: Set(entry.old_status),
            new_status: Set(entry.new_status),
            changed_by: Set(entry.changed_by),
            reason: Set(entry.reason),
            created_at: Set(entry.created_at.fixed_offset()),
        };

        active
            .insert(&*self.db)
            .await
            .map(Into::into)
            .map_err(|e| StatusLogRepositoryError::DatabaseError(e.to_string()))
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<StatusLog>, StatusLogRepositoryError> {
        let rows = StatusLogEntity::find()
            .filter(StatusLogColumn::UserId.eq(user_id))
            .order_by_desc(StatusLogColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| StatusLogRepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::user_status_logs::Model as StatusLogModel;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn log_model(user_id: Uuid, new_status: &str, minutes_ago: i64) -> StatusLogModel {
        StatusLogModel {
            id: Uuid::new_v4(),
            user_id,
            old_status: "ACTIVE".to_string(),
            new_status: new_status.to_string(),
            changed_by: Uuid::new_v4(),
            reason: Some("spam reports".to_string()),
            created_at: (Utc::now() - Duration::minutes(minutes_ago)).fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_append_returns_stored_entry() {
        let user_id = Uuid::new_v4();
        let model = log_model(user_id, "SUSPENDED", 0);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();
        let repo = StatusLogRepositoryPostgres::new(Arc::new(db));

        let stored = repo.append(model.into()).await.unwrap();

        assert_eq!(stored.user_id, user_id);
        assert_eq!(stored.new_status, "SUSPENDED");
        assert_eq!(stored.reason.as_deref(), Some("spam reports"));
    }

    #[tokio::test]
    async fn test_list_for_user_keeps_query_order() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                log_model(user_id, "ACTIVE", 1),
                log_model(user_id, "INACTIVE", 10),
            ]])
            .into_connection();
        let repo = StatusLogRepositoryPostgres::new(Arc::new(db));

        let history = repo.list_for_user(user_id).await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].new_status, "ACTIVE");
        assert!(history[0].created_at > history[1].created_at);
    }
}
