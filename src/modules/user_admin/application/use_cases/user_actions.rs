use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserRole, UserStatus};
use crate::auth::application::domain::policies::normalize_email;
use crate::auth::application::ports::incoming::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionRepository, UserProfileUpdate, UserQuery, UserRepository,
    UserRepositoryError,
};
use crate::user_admin::application::use_cases::change_status::{
    ChangeStatusCommand, ChangeStatusError, IChangeUserStatusUseCase, StatusChange,
};

/// Fields an admin may change with the `edit` action.
#[derive(Debug, Clone, Default)]
pub struct UserEdit {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone)]
pub enum UserAction {
    View,
    Edit(UserEdit),
    ResetPassword { new_password: String },
    Lock,
    Unlock,
    Delete,
}

#[derive(Debug, Clone)]
pub enum UserActionOutcome {
    Viewed(User),
    Updated(User),
    PasswordReset,
    Locked(User),
    Unlocked(User),
    Deleted,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserActionError {
    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("User with this email already exists")]
    EmailTaken,

    #[error("{0}")]
    SelfAction(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ChangeStatusError> for UserActionError {
    fn from(err: ChangeStatusError) -> Self {
        match err {
            ChangeStatusError::UserNotFound => UserActionError::UserNotFound,
            ChangeStatusError::SelfDeactivation => {
                UserActionError::SelfAction("You cannot lock your own account".to_string())
            }
            ChangeStatusError::Internal(e) => UserActionError::Internal(e),
        }
    }
}

fn repo_error(err: UserRepositoryError) -> UserActionError {
    match err {
        UserRepositoryError::UserNotFound => UserActionError::UserNotFound,
        UserRepositoryError::UserAlreadyExists => UserActionError::EmailTaken,
        UserRepositoryError::DatabaseError(e) => UserActionError::Internal(e),
    }
}

#[async_trait]
pub trait IUserActionsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        actor_id: Uuid,
        action: UserAction,
    ) -> Result<UserActionOutcome, UserActionError>;
}

/// The admin panel's per-user action menu.
#[derive(Clone)]
pub struct UserActionsUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    query: Q,
    repository: R,
    sessions: S,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
    change_status: Arc<dyn IChangeUserStatusUseCase>,
}

impl<Q, R, S> UserActionsUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        sessions: S,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
        change_status: Arc<dyn IChangeUserStatusUseCase>,
    ) -> Self {
        Self {
            query,
            repository,
            sessions,
            password_hasher,
            password_policy,
            change_status,
        }
    }

    async fn edit(&self, user: &User, edit: UserEdit) -> Result<User, UserActionError> {
        let first_name = non_empty(edit.first_name, "First name")?;
        let last_name = non_empty(edit.last_name, "Last name")?;

        let email = match edit.email {
            Some(raw) => {
                let email =
                    normalize_email(&raw).map_err(|e| UserActionError::Validation(e.to_string()))?;
                let holder = self
                    .query
                    .find_by_email(&email)
                    .await
                    .map_err(|e| UserActionError::Internal(e.to_string()))?;
                if holder.is_some_and(|other| other.id != user.id) {
                    return Err(UserActionError::EmailTaken);
                }
                Some(email)
            }
            None => None,
        };

        let role = match edit.role {
            Some(role) => {
                role.parse::<UserRole>()
                    .map_err(|_| UserActionError::Validation("Invalid role".to_string()))?;
                Some(role)
            }
            None => None,
        };

        self.repository
            .update_profile(
                user.id,
                UserProfileUpdate {
                    first_name,
                    last_name,
                    email,
                    role,
                },
            )
            .await
            .map_err(repo_error)
    }

    async fn reset_password(&self, user: &User, new_password: &str) -> Result<(), UserActionError> {
        self.password_policy
            .validate(new_password)
            .map_err(|e| UserActionError::Validation(e.to_string()))?;

        let hash = self
            .password_hasher
            .hash_password(new_password)
            .await
            .map_err(|e| UserActionError::Internal(e.to_string()))?;

        self.repository
            .update_password(user.id, hash)
            .await
            .map_err(repo_error)?;

        if let Err(e) = self.sessions.delete_all_for_user(user.id).await {
            warn!(user_id = %user.id, error = %e, "Password reset by admin but sessions not cleared");
        }
        Ok(())
    }
}

fn non_empty(value: Option<String>, field: &str) -> Result<Option<String>, UserActionError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if v.is_empty() => Err(UserActionError::Validation(format!(
            "{} cannot be empty",
            field
        ))),
        other => Ok(other),
    }
}

#[async_trait]
impl<Q, R, S> IUserActionsUseCase for UserActionsUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    async fn execute(
        &self,
        user_id: Uuid,
        actor_id: Uuid,
        action: UserAction,
    ) -> Result<UserActionOutcome, UserActionError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| UserActionError::Internal(e.to_string()))?
            .ok_or(UserActionError::UserNotFound)?;

        let outcome = match action {
            UserAction::View => UserActionOutcome::Viewed(user),

            UserAction::Edit(edit) => UserActionOutcome::Updated(self.edit(&user, edit).await?),

            UserAction::ResetPassword { new_password } => {
                self.reset_password(&user, &new_password).await?;
                UserActionOutcome::PasswordReset
            }

            UserAction::Lock => {
                if user.id == actor_id {
                    return Err(UserActionError::SelfAction(
                        "You cannot lock your own account".to_string(),
                    ));
                }
                let locked = self
                    .change_status
                    .execute(ChangeStatusCommand {
                        user_id,
                        actor_id,
                        change: StatusChange::Set(UserStatus::Suspended),
                        reason: Some("Locked by administrator".to_string()),
                    })
                    .await?;
                UserActionOutcome::Locked(locked)
            }

            UserAction::Unlock => {
                let unlocked = self
                    .change_status
                    .execute(ChangeStatusCommand {
                        user_id,
                        actor_id,
                        change: StatusChange::Set(UserStatus::Active),
                        reason: Some("Unlocked by administrator".to_string()),
                    })
                    .await?;
                UserActionOutcome::Unlocked(unlocked)
            }

            UserAction::Delete => {
                if user.id == actor_id {
                    return Err(UserActionError::SelfAction(
                        "You cannot delete your own account".to_string(),
                    ));
                }
                self.repository
                    .delete_user(user_id)
                    .await
                    .map_err(repo_error)?;
                UserActionOutcome::Deleted
            }
        };

        info!(%user_id, %actor_id, "Admin user action applied");
        Ok(outcome)
    }
}
