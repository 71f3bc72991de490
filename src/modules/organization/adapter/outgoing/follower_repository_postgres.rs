use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::followers::{ActiveModel, Column, Entity};
use crate::organization::application::ports::outgoing::{
    FollowerRepository, FollowerRepositoryError,
};

#[derive(Clone)]
pub struct FollowerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> FollowerRepositoryError {
        let msg = e.to_string();
        if msg.contains("23505") || msg.to_lowercase().contains("duplicate key") {
            return FollowerRepositoryError::AlreadyFollowing;
        }
        FollowerRepositoryError::DatabaseError(msg)
    }
}

#[async_trait]
impl FollowerRepository for FollowerRepositoryPostgres {
    async fn is_following(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<bool, FollowerRepositoryError> {
        let count = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::OrganizationId.eq(organization_id))
            .count(&*self.db)
            .await
            .map_err(Self::map_db_err)?;
        Ok(count > 0)
    }

    async fn follow(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<(), FollowerRepositoryError> {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            organization_id: Set(organization_id),
            created_at: Set(chrono::Utc::now().fixed_offset()),
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_err)?;
        Ok(())
    }

    async fn unfollow(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<bool, FollowerRepositoryError> {
        let result = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::OrganizationId.eq(organization_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}
