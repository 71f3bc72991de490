use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};
use crate::auth::application::domain::entities::{NewUser, StatusTransition, User, UserStatus};
use crate::auth::application::ports::outgoing::user_repository::{
    UserProfileUpdate, UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    fn to_user(model: UserModel) -> Result<User, UserRepositoryError> {
        User::try_from(model).map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))
    }

    async fn load_model(&self, user_id: Uuid) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }

    async fn load(&self, user_id: Uuid) -> Result<UserActiveModel, UserRepositoryError> {
        self.load_model(user_id).await.map(Into::into)
    }

    async fn save(&self, active_user: UserActiveModel) -> Result<User, UserRepositoryError> {
        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;
        Self::to_user(updated)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            role: Set(user.role.as_str().to_string()),
            email_verified: Set(user.email_verified),
            email_verify_token: Set(user.email_verify_token),
            password_reset_token: Set(None),
            password_reset_expires: Set(None),
            organization_id: Set(None),
            avatar: Set(None),
            bio: Set(None),
            location: Set(None),
            is_active: Set(true),
            status: Set(user.status.as_str().to_string()),
            deactivated_at: Set(None),
            deactivated_by: Set(None),
            reactivated_at: Set(None),
            last_login_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Self::to_user(inserted)
    }

    async fn mark_email_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let model = self.load_model(user_id).await?;
        let was_pending = model.status == UserStatus::PendingVerification.as_str();

        let mut active_user: UserActiveModel = model.into();
        if was_pending {
            active_user.status = Set(UserStatus::Active.as_str().to_string());
        }
        active_user.email_verified = Set(true);
        active_user.email_verify_token = Set(None);

        self.save(active_user).await
    }

    async fn record_login(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.last_login_at = Set(Some(at.fixed_offset()));
        self.save(active_user).await.map(|_| ())
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: UserProfileUpdate,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;

        if let Some(first_name) = update.first_name {
            active_user.first_name = Set(first_name);
        }
        if let Some(last_name) = update.last_name {
            active_user.last_name = Set(last_name);
        }
        if let Some(email) = update.email {
            active_user.email = Set(email);
        }
        if let Some(role) = update.role {
            active_user.role = Set(role);
        }

        self.save(active_user).await
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_hash = Set(new_password_hash);
        active_user.password_reset_token = Set(None);
        active_user.password_reset_expires = Set(None);
        self.save(active_user).await.map(|_| ())
    }

    async fn set_password_reset(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.password_reset_token = Set(Some(token_hash));
        active_user.password_reset_expires = Set(Some(expires_at.fixed_offset()));
        self.save(active_user).await.map(|_| ())
    }

    async fn apply_status_transition(
        &self,
        user_id: Uuid,
        transition: &StatusTransition,
    ) -> Result<User, UserRepositoryError> {
        let mut active_user = self.load(user_id).await?;
        active_user.status = Set(transition.new_status.as_str().to_string());
        active_user.is_active = Set(transition.is_active);
        active_user.deactivated_at = Set(transition.deactivated_at.map(|t| t.fixed_offset()));
        active_user.deactivated_by = Set(transition.deactivated_by);
        active_user.reactivated_at = Set(transition.reactivated_at.map(|t| t.fixed_offset()));
        self.save(active_user).await
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let active_user = self.load(user_id).await?;
        active_user
            .delete(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::fixtures::user_model;
    use crate::auth::application::domain::entities::UserRole;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_user() -> NewUser {
        NewUser {
            id: Uuid::new_v4(),
            email: "robin@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            first_name: "Robin".to_string(),
            last_name: "Dice".to_string(),
            role: UserRole::EndUser,
            email_verified: false,
            email_verify_token: Some("verify-token".to_string()),
            status: UserStatus::PendingVerification,
        }
    }

    fn repository(db: MockDatabase) -> UserRepositoryPostgres {
        UserRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let data = new_user();
        let mut row = user_model(data.id, &data.email);
        row.email_verified = false;
        row.status = "PENDING_VERIFICATION".to_string();
        row.email_verify_token = data.email_verify_token.clone();

        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results(vec![vec![row]]),
        );

        let user = repo.create_user(data.clone()).await.unwrap();

        assert_eq!(user.id, data.id);
        assert_eq!(user.email, "robin@example.com");
        assert_eq!(user.status, UserStatus::PendingVerification);
        assert_eq!(user.email_verify_token.as_deref(), Some("verify-token"));
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let repo = repository(MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([
            DbErr::Custom("duplicate key value violates unique constraint".to_string()),
        ]));

        let result = repo.create_user(new_user()).await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_errors([DbErr::Custom("connection timeout".to_string())]),
        );

        match repo.create_user(new_user()).await {
            Err(UserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection timeout"))
            }
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mark_email_verified_promotes_pending_account() {
        let user_id = Uuid::new_v4();
        let mut pending = user_model(user_id, "robin@example.com");
        pending.email_verified = false;
        pending.status = "PENDING_VERIFICATION".to_string();
        pending.email_verify_token = Some("t".to_string());

        let verified = user_model(user_id, "robin@example.com");

        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![pending]])
                .append_query_results(vec![vec![verified]]),
        );

        let user = repo.mark_email_verified(user_id).await.unwrap();

        assert!(user.email_verified);
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.email_verify_token.is_none());
    }

    #[tokio::test]
    async fn test_update_password_user_not_found() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<UserModel>::new()]),
        );

        let result = repo
            .update_password(Uuid::new_v4(), "new_hash".to_string())
            .await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_update_profile_email_collision() {
        let user_id = Uuid::new_v4();
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![user_model(user_id, "robin@example.com")]])
                .append_query_errors([DbErr::Custom(
                    "error returned from database: 23505".to_string(),
                )]),
        );

        let update = UserProfileUpdate {
            email: Some("taken@example.com".to_string()),
            ..Default::default()
        };
        let result = repo.update_profile(user_id, update).await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_apply_status_transition_returns_updated_user() {
        let user_id = Uuid::new_v4();
        let mut suspended = user_model(user_id, "robin@example.com");
        suspended.status = "SUSPENDED".to_string();
        suspended.is_active = false;

        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![user_model(user_id, "robin@example.com")]])
                .append_query_results(vec![vec![suspended]]),
        );

        let transition = StatusTransition {
            old_status: UserStatus::Active,
            new_status: UserStatus::Suspended,
            is_active: false,
            deactivated_at: None,
            deactivated_by: None,
            reactivated_at: None,
        };
        let user = repo
            .apply_status_transition(user_id, &transition)
            .await
            .unwrap();

        assert_eq!(user.status, UserStatus::Suspended);
        assert!(!user.is_active);
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let user_id = Uuid::new_v4();
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![user_model(user_id, "robin@example.com")]])
                .append_exec_results(vec![MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                }]),
        );

        assert!(repo.delete_user(user_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<UserModel>::new()]),
        );

        let result = repo.delete_user(Uuid::new_v4()).await;

        assert!(matches!(result, Err(UserRepositoryError::UserNotFound)));
    }
}
