use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::sessions::{
    ActiveModel as SessionActiveModel, Column as SessionColumn, Entity as SessionEntity,
};
use crate::auth::application::domain::entities::Session;
use crate::auth::application::ports::outgoing::session_repository::{
    SessionRepository, SessionRepositoryError,
};

#[derive(Clone, Debug)]
pub struct SessionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SessionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> SessionRepositoryError {
    SessionRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SessionRepository for SessionRepositoryPostgres {
    async fn create(&self, session: Session) -> Result<Session, SessionRepositoryError> {
        let active = SessionActiveModel {
            id: Set(session.id),
            user_id: Set(session.user_id),
            token_hash: Set(session.token_hash),
            expires_at: Set(session.expires_at.fixed_offset()),
            created_at: Set(session.created_at.fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(db_error)?;
        Ok(inserted.into())
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, SessionRepositoryError> {
        let found = SessionEntity::find()
            .filter(SessionColumn::TokenHash.eq(token_hash))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(found.map(Into::into))
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, SessionRepositoryError> {
        let result = SessionEntity::delete_many()
            .filter(SessionColumn::TokenHash.eq(token_hash))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected > 0)
    }

    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<u64, SessionRepositoryError> {
        let result = SessionEntity::delete_many()
            .filter(SessionColumn::UserId.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected)
    }
}
