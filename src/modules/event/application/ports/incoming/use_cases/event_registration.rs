use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::domain::entities::Registration;
use crate::event::application::ports::outgoing::{AttendeeRepositoryError, EventQueryError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Event is not open for registration")]
    EventClosed,

    #[error("User is already registered for this event")]
    AlreadyRegistered,

    #[error("User is not registered for this event")]
    NotRegistered,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EventQueryError> for RegistrationError {
    fn from(err: EventQueryError) -> Self {
        RegistrationError::Internal(err.to_string())
    }
}

impl From<AttendeeRepositoryError> for RegistrationError {
    fn from(err: AttendeeRepositoryError) -> Self {
        match err {
            AttendeeRepositoryError::AlreadyRegistered => RegistrationError::AlreadyRegistered,
            AttendeeRepositoryError::DatabaseError(msg) => RegistrationError::Internal(msg),
        }
    }
}

#[async_trait]
pub trait EventRegistrationUseCase: Send + Sync {
    async fn register(&self, event_id: Uuid, user_id: Uuid)
        -> Result<Registration, RegistrationError>;
    async fn cancel(&self, event_id: Uuid, user_id: Uuid) -> Result<(), RegistrationError>;
}
