use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::event_attendees::{ActiveModel, Column, Entity, Model};
use crate::event::application::domain::entities::{AttendeeStatus, Registration};
use crate::event::application::ports::outgoing::{AttendeeRepository, AttendeeRepositoryError};

#[derive(Clone)]
pub struct AttendeeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AttendeeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> AttendeeRepositoryError {
        let msg = e.to_string();
        if msg.contains("23505") || msg.to_lowercase().contains("duplicate key") {
            return AttendeeRepositoryError::AlreadyRegistered;
        }
        AttendeeRepositoryError::DatabaseError(msg)
    }

    fn to_registration(model: Model) -> Result<Registration, AttendeeRepositoryError> {
        Ok(Registration {
            status: model
                .status
                .parse::<AttendeeStatus>()
                .map_err(AttendeeRepositoryError::DatabaseError)?,
            id: model.id,
            event_id: model.event_id,
            user_id: model.user_id,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        })
    }
}

#[async_trait]
impl AttendeeRepository for AttendeeRepositoryPostgres {
    async fn find(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Registration>, AttendeeRepositoryError> {
        Entity::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::UserId.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .map(Self::to_registration)
            .transpose()
    }

    async fn count_attending(&self, event_id: Uuid) -> Result<u64, AttendeeRepositoryError> {
        Entity::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::Status.eq(AttendeeStatus::Attending.as_str()))
            .count(&*self.db)
            .await
            .map_err(Self::map_db_err)
    }

    async fn insert(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        status: AttendeeStatus,
    ) -> Result<Registration, AttendeeRepositoryError> {
        let saved = ActiveModel {
            id: Set(Uuid::new_v4()),
            event_id: Set(event_id),
            user_id: Set(user_id),
            status: Set(status.as_str().to_string()),
            created_at: Set(chrono::Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        Self::to_registration(saved)
    }

    async fn delete(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, AttendeeRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn attendee_model(event_id: Uuid, user_id: Uuid, status: &str) -> Model {
        Model {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            status: status.to_string(),
            created_at: chrono::Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn test_insert_returns_registration() {
        let event_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![attendee_model(event_id, user_id, "WAITLIST")]])
            .into_connection();
        let repo = AttendeeRepositoryPostgres::new(Arc::new(db));

        let registration = repo
            .insert(event_id, user_id, AttendeeStatus::Waitlist)
            .await
            .unwrap();

        assert_eq!(registration.status, AttendeeStatus::Waitlist);
        assert_eq!(registration.event_id, event_id);
    }

    #[tokio::test]
    async fn test_unique_violation_is_already_registered() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_event_attendees_event_user\""
                    .to_string(),
            )])
            .into_connection();
        let repo = AttendeeRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .insert(Uuid::new_v4(), Uuid::new_v4(), AttendeeStatus::Attending)
            .await;

        assert_eq!(result.unwrap_err(), AttendeeRepositoryError::AlreadyRegistered);
    }

    #[tokio::test]
    async fn test_find_rejects_unknown_status() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![attendee_model(
                Uuid::new_v4(),
                Uuid::new_v4(),
                "MAYBE",
            )]])
            .into_connection();
        let repo = AttendeeRepositoryPostgres::new(Arc::new(db));

        let result = repo.find(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(result, Err(AttendeeRepositoryError::DatabaseError(_))));
    }
}
