use async_trait::async_trait;

use crate::event::application::domain::entities::{EventListing, GameSession};
use crate::event::application::ports::outgoing::EventQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEventsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<EventQueryError> for ListEventsError {
    fn from(err: EventQueryError) -> Self {
        match err {
            EventQueryError::DatabaseError(msg) => ListEventsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListPublicEventsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EventListing>, ListEventsError>;
}

#[async_trait]
pub trait ListGameSessionsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<GameSession>, ListEventsError>;
}
