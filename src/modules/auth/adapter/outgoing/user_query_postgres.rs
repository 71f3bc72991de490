use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_user(model: UserModel) -> Result<User, UserQueryError> {
        User::try_from(model).map_err(|e| UserQueryError::InvalidRow(e.to_string()))
    }

    async fn find_one_where(
        &self,
        column: UserColumn,
        value: &str,
    ) -> Result<Option<User>, UserQueryError> {
        UserEntity::find()
            .filter(column.eq(value))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(Self::to_user)
            .transpose()
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .map(Self::to_user)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.find_one_where(UserColumn::Email, email).await
    }

    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.find_one_where(UserColumn::EmailVerifyToken, token).await
    }

    async fn find_by_password_reset_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.find_one_where(UserColumn::PasswordResetToken, token_hash)
            .await
    }

    async fn list_all(&self) -> Result<Vec<User>, UserQueryError> {
        UserEntity::find()
            .order_by_desc(UserColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Self::to_user)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::fixtures::user_model;
    use crate::auth::application::domain::entities::UserStatus;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn query_with(results: Vec<Vec<UserModel>>) -> UserQueryPostgres {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(results)
            .into_connection();
        UserQueryPostgres::new(Arc::new(db))
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let user_id = Uuid::new_v4();
        let query = query_with(vec![vec![user_model(user_id, "robin@example.com")]]);

        let user = query.find_by_id(user_id).await.unwrap().unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.email, "robin@example.com");
        assert_eq!(user.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let query = query_with(vec![Vec::<UserModel>::new()]);

        let result = query.find_by_id(Uuid::new_v4()).await;

        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();
        let query = UserQueryPostgres::new(Arc::new(db));

        match query.find_by_id(Uuid::new_v4()).await {
            Err(UserQueryError::DatabaseError(msg)) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unknown_status_is_reported_as_invalid_row() {
        let mut row = user_model(Uuid::new_v4(), "odd@example.com");
        row.status = "LOCKED".to_string();
        let query = query_with(vec![vec![row]]);

        let result = query.find_by_email("odd@example.com").await;

        assert!(matches!(result, Err(UserQueryError::InvalidRow(_))));
    }

    #[tokio::test]
    async fn test_find_by_verification_token() {
        let mut row = user_model(Uuid::new_v4(), "new@example.com");
        row.email_verified = false;
        row.status = "PENDING_VERIFICATION".to_string();
        row.email_verify_token = Some("abc123".to_string());
        let query = query_with(vec![vec![row]]);

        let user = query
            .find_by_verification_token("abc123")
            .await
            .unwrap()
            .unwrap();

        assert!(!user.email_verified);
        assert_eq!(user.status, UserStatus::PendingVerification);
    }

    #[tokio::test]
    async fn test_list_all_maps_every_row() {
        let query = query_with(vec![vec![
            user_model(Uuid::new_v4(), "b@example.com"),
            user_model(Uuid::new_v4(), "a@example.com"),
        ]]);

        let users = query.list_all().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "b@example.com");
    }
}
