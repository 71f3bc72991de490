use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Sessions are addressed by the SHA-256 digest of their bearer token.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: Session) -> Result<Session, SessionRepositoryError>;

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Session>, SessionRepositoryError>;

    /// Returns whether a row was removed.
    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<bool, SessionRepositoryError>;

    /// Returns the number of sessions removed.
    async fn delete_all_for_user(&self, user_id: Uuid) -> Result<u64, SessionRepositoryError>;
}
