use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Failed to list users: {0}")]
    Internal(String),
}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    /// Every account, newest first.
    async fn execute(&self) -> Result<Vec<User>, ListUsersError>;
}

#[derive(Clone)]
pub struct ListUsersUseCase<Q: UserQuery> {
    query: Q,
}

impl<Q: UserQuery> ListUsersUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: UserQuery> IListUsersUseCase for ListUsersUseCase<Q> {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListUsersError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::test_fixtures::sample_user;
    use crate::tests::support::in_memory::InMemoryUsers;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_lists_newest_first() {
        let mut older = sample_user();
        older.created_at = Utc::now() - Duration::days(2);
        let mut newer = sample_user();
        newer.id = Uuid::new_v4();
        newer.email = "newer@example.com".to_string();

        let uc = ListUsersUseCase::new(InMemoryUsers::with(vec![older, newer]));
        let users = uc.execute().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].email, "newer@example.com");
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let uc = ListUsersUseCase::new(InMemoryUsers::failing());
        assert!(matches!(uc.execute().await, Err(ListUsersError::Internal(_))));
    }
}
