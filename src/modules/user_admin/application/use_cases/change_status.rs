use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{StatusLog, User, UserStatus};
use crate::auth::application::ports::outgoing::{
    SessionRepository, StatusLogRepository, UserQuery, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Set(UserStatus),
    /// `ACTIVE` becomes `INACTIVE`, anything else becomes `ACTIVE`.
    Toggle,
}

impl StatusChange {
    fn target_for(self, current: UserStatus) -> UserStatus {
        match self {
            StatusChange::Set(status) => status,
            StatusChange::Toggle if current == UserStatus::Active => UserStatus::Inactive,
            StatusChange::Toggle => UserStatus::Active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChangeStatusCommand {
    pub user_id: Uuid,
    pub actor_id: Uuid,
    pub change: StatusChange,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChangeStatusError {
    #[error("User not found")]
    UserNotFound,

    #[error("You cannot deactivate your own account")]
    SelfDeactivation,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait IChangeUserStatusUseCase: Send + Sync {
    async fn execute(&self, command: ChangeStatusCommand) -> Result<User, ChangeStatusError>;
}

/// Applies a status transition, records it in the audit log and, for
/// `INACTIVE`/`SUSPENDED`, ends every session the user holds.
#[derive(Clone)]
pub struct ChangeUserStatusUseCase<Q, R, L, S>
where
    Q: UserQuery,
    R: UserRepository,
    L: StatusLogRepository,
    S: SessionRepository,
{
    query: Q,
    repository: R,
    logs: L,
    sessions: S,
}

impl<Q, R, L, S> ChangeUserStatusUseCase<Q, R, L, S>
where
    Q: UserQuery,
    R: UserRepository,
    L: StatusLogRepository,
    S: SessionRepository,
{
    pub fn new(query: Q, repository: R, logs: L, sessions: S) -> Self {
        Self {
            query,
            repository,
            logs,
            sessions,
        }
    }
}

#[async_trait]
impl<Q, R, L, S> IChangeUserStatusUseCase for ChangeUserStatusUseCase<Q, R, L, S>
where
    Q: UserQuery,
    R: UserRepository,
    L: StatusLogRepository,
    S: SessionRepository,
{
    async fn execute(&self, command: ChangeStatusCommand) -> Result<User, ChangeStatusError> {
        let user = self
            .query
            .find_by_id(command.user_id)
            .await
            .map_err(|e| ChangeStatusError::Internal(e.to_string()))?
            .ok_or(ChangeStatusError::UserNotFound)?;

        let target = command.change.target_for(user.status);
        if command.actor_id == user.id && target != UserStatus::Active {
            return Err(ChangeStatusError::SelfDeactivation);
        }

        let now = Utc::now();
        let transition = user.transition_to(target, command.actor_id, now);

        let updated = self
            .repository
            .apply_status_transition(user.id, &transition)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangeStatusError::UserNotFound,
                other => ChangeStatusError::Internal(other.to_string()),
            })?;

        self.logs
            .append(StatusLog {
                id: Uuid::new_v4(),
                user_id: user.id,
                old_status: transition.old_status.to_string(),
                new_status: transition.new_status.to_string(),
                changed_by: command.actor_id,
                reason: command.reason,
                created_at: now,
            })
            .await
            .map_err(|e| ChangeStatusError::Internal(e.to_string()))?;

        info!(
            user_id = %user.id,
            actor_id = %command.actor_id,
            old_status = %transition.old_status,
            new_status = %transition.new_status,
            "User status changed"
        );

        if target.revokes_sessions() {
            // Leftover rows are harmless: session lookup rejects blocked users.
            match self.sessions.delete_all_for_user(user.id).await {
                Ok(count) => info!(user_id = %user.id, sessions = count, "Sessions revoked"),
                Err(e) => warn!(user_id = %user.id, error = %e, "Failed to revoke sessions"),
            }
        }

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::test_fixtures::sample_user;
    use crate::auth::application::domain::entities::Session;
    use crate::tests::support::in_memory::{InMemorySessions, InMemoryStatusLogs, InMemoryUsers};
    use chrono::Duration;

    type UseCase =
        ChangeUserStatusUseCase<InMemoryUsers, InMemoryUsers, InMemoryStatusLogs, InMemorySessions>;

    fn session_for(user_id: Uuid) -> Session {
        Session {
            id: Uuid::new_v4(),
            user_id,
            token_hash: Uuid::new_v4().simple().to_string(),
            expires_at: Utc::now() + Duration::days(1),
            created_at: Utc::now(),
        }
    }

    fn setup(
        user: User,
    ) -> (UseCase, InMemoryUsers, InMemoryStatusLogs, InMemorySessions) {
        let users = InMemoryUsers::with(vec![user.clone()]);
        let logs = InMemoryStatusLogs::default();
        let sessions = InMemorySessions::with(vec![session_for(user.id), session_for(user.id)]);
        let uc = ChangeUserStatusUseCase::new(
            users.clone(),
            users.clone(),
            logs.clone(),
            sessions.clone(),
        );
        (uc, users, logs, sessions)
    }

    fn command(user_id: Uuid, actor_id: Uuid, change: StatusChange) -> ChangeStatusCommand {
        ChangeStatusCommand {
            user_id,
            actor_id,
            change,
            reason: Some("rules violation".to_string()),
        }
    }

    #[tokio::test]
    async fn test_deactivation_logs_once_and_revokes_sessions() {
        let user = sample_user();
        let admin = Uuid::new_v4();
        let (uc, users, logs, sessions) = setup(user.clone());

        let updated = uc
            .execute(command(user.id, admin, StatusChange::Set(UserStatus::Inactive)))
            .await
            .unwrap();

        assert_eq!(updated.status, UserStatus::Inactive);
        assert!(!updated.is_active);
        assert_eq!(updated.deactivated_by, Some(admin));
        assert_eq!(sessions.count_for(user.id), 0);

        let entries = logs.all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].old_status, "ACTIVE");
        assert_eq!(entries[0].new_status, "INACTIVE");
        assert_eq!(entries[0].changed_by, admin);
        assert_eq!(entries[0].reason.as_deref(), Some("rules violation"));
        assert_eq!(users.get(user.id).unwrap().status, UserStatus::Inactive);
    }

    #[tokio::test]
    async fn test_reactivation_keeps_sessions() {
        let mut user = sample_user();
        user.status = UserStatus::Inactive;
        user.is_active = false;
        let (uc, _, logs, sessions) = setup(user.clone());

        let updated = uc
            .execute(command(user.id, Uuid::new_v4(), StatusChange::Set(UserStatus::Active)))
            .await
            .unwrap();

        assert!(updated.is_active);
        assert!(updated.reactivated_at.is_some());
        assert_eq!(sessions.count_for(user.id), 2);
        assert_eq!(logs.all().len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_flips_between_active_and_inactive() {
        let user = sample_user();
        let (uc, _, _, _) = setup(user.clone());
        let admin = Uuid::new_v4();

        let first = uc
            .execute(command(user.id, admin, StatusChange::Toggle))
            .await
            .unwrap();
        assert_eq!(first.status, UserStatus::Inactive);

        let second = uc
            .execute(command(user.id, admin, StatusChange::Toggle))
            .await
            .unwrap();
        assert_eq!(second.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_toggle_on_suspended_user_reactivates() {
        let mut user = sample_user();
        user.status = UserStatus::Suspended;
        let (uc, _, _, _) = setup(user.clone());

        let updated = uc
            .execute(command(user.id, Uuid::new_v4(), StatusChange::Toggle))
            .await
            .unwrap();
        assert_eq!(updated.status, UserStatus::Active);
    }

    #[tokio::test]
    async fn test_admin_cannot_deactivate_self() {
        let user = sample_user();
        let (uc, _, logs, _) = setup(user.clone());

        let err = uc
            .execute(command(user.id, user.id, StatusChange::Set(UserStatus::Suspended)))
            .await
            .unwrap_err();

        assert_eq!(err, ChangeStatusError::SelfDeactivation);
        assert!(logs.all().is_empty());
    }

    #[tokio::test]
    async fn test_missing_user() {
        let (uc, _, _, _) = setup(sample_user());

        let err = uc
            .execute(command(Uuid::new_v4(), Uuid::new_v4(), StatusChange::Toggle))
            .await
            .unwrap_err();
        assert_eq!(err, ChangeStatusError::UserNotFound);
    }

    #[tokio::test]
    async fn test_session_cleanup_failure_is_not_fatal() {
        let user = sample_user();
        let users = InMemoryUsers::with(vec![user.clone()]);
        let uc = ChangeUserStatusUseCase::new(
            users.clone(),
            users,
            InMemoryStatusLogs::default(),
            InMemorySessions::with(vec![session_for(user.id)]).failing_deletes(),
        );

        let updated = uc
            .execute(command(user.id, Uuid::new_v4(), StatusChange::Set(UserStatus::Suspended)))
            .await
            .unwrap();
        assert!(updated.is_blocked());
    }
}
