use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{StatusLog, User};
use crate::auth::application::ports::outgoing::{StatusLogRepository, UserQuery};

#[derive(Debug, Clone)]
pub struct UserStatusHistory {
    pub user: User,
    /// Newest first.
    pub logs: Vec<StatusLog>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserStatusHistoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait IUserStatusHistoryUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserStatusHistory, UserStatusHistoryError>;
}

#[derive(Clone)]
pub struct UserStatusHistoryUseCase<Q: UserQuery, L: StatusLogRepository> {
    query: Q,
    logs: L,
}

impl<Q: UserQuery, L: StatusLogRepository> UserStatusHistoryUseCase<Q, L> {
    pub fn new(query: Q, logs: L) -> Self {
        Self { query, logs }
    }
}

#[async_trait]
impl<Q: UserQuery, L: StatusLogRepository> IUserStatusHistoryUseCase
    for UserStatusHistoryUseCase<Q, L>
{
    async fn execute(&self, user_id: Uuid) -> Result<UserStatusHistory, UserStatusHistoryError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| UserStatusHistoryError::Internal(e.to_string()))?
            .ok_or(UserStatusHistoryError::UserNotFound)?;

        let logs = self
            .logs
            .list_for_user(user_id)
            .await
            .map_err(|e| UserStatusHistoryError::Internal(e.to_string()))?;

        Ok(UserStatusHistory { user, logs })
    }
}
