use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::domain::entities::{AttendeeStatus, Registration};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttendeeRepositoryError {
    #[error("Already registered")]
    AlreadyRegistered,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AttendeeRepository: Send + Sync {
    async fn find(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Registration>, AttendeeRepositoryError>;

    async fn count_attending(&self, event_id: Uuid) -> Result<u64, AttendeeRepositoryError>;

    async fn insert(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        status: AttendeeStatus,
    ) -> Result<Registration, AttendeeRepositoryError>;

    /// Returns whether a row was removed.
    async fn delete(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, AttendeeRepositoryError>;
}
