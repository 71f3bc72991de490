use async_trait::async_trait;

use crate::event::application::domain::entities::{EventListing, GameSession};
use crate::event::application::ports::incoming::use_cases::{
    ListEventsError, ListGameSessionsUseCase, ListPublicEventsUseCase,
};
use crate::event::application::ports::outgoing::EventQuery;

pub struct ListPublicEventsService<Q>
where
    Q: EventQuery,
{
    query: Q,
}

impl<Q> ListPublicEventsService<Q>
where
    Q: EventQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPublicEventsUseCase for ListPublicEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<EventListing>, ListEventsError> {
        Ok(self.query.list_public().await?)
    }
}

pub struct ListGameSessionsService<Q>
where
    Q: EventQuery,
{
    query: Q,
}

impl<Q> ListGameSessionsService<Q>
where
    Q: EventQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListGameSessionsUseCase for ListGameSessionsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<GameSession>, ListEventsError> {
        let events = self.query.list_active().await?;
        Ok(events.into_iter().map(GameSession::from).collect())
    }
}
