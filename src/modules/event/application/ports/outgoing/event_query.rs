use async_trait::async_trait;
use uuid::Uuid;

use crate::event::application::domain::entities::{EventListing, EventSlot};

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EventQuery: Send + Sync {
    /// ACTIVE + PUBLIC events, ascending by start time.
    async fn list_public(&self) -> Result<Vec<EventListing>, EventQueryError>;
    /// ACTIVE events of any type, ascending by start time.
    async fn list_active(&self) -> Result<Vec<EventListing>, EventQueryError>;
    async fn find_slot(&self, event_id: Uuid) -> Result<Option<EventSlot>, EventQueryError>;
}
