use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::StatusLog;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatusLogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Append-only audit trail of status changes.
#[async_trait]
pub trait StatusLogRepository: Send + Sync {
    async fn append(&self, entry: StatusLog) -> Result<StatusLog, StatusLogRepositoryError>;

    /// Newest first.
    async fn list_for_user(&self, user_id: Uuid)
        -> Result<Vec<StatusLog>, StatusLogRepositoryError>;
}
