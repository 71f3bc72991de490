use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::event::application::domain::entities::{AttendeeStatus, Registration};
use crate::event::application::ports::incoming::use_cases::{
    EventRegistrationUseCase, RegistrationError,
};
use crate::event::application::ports::outgoing::{AttendeeRepository, EventQuery};

/// Seats a user on an event, or waitlists them once it is full.
pub struct EventRegistrationService<Q, A>
where
    Q: EventQuery,
    A: AttendeeRepository,
{
    events: Q,
    attendees: A,
}

impl<Q, A> EventRegistrationService<Q, A>
where
    Q: EventQuery,
    A: AttendeeRepository,
{
    pub fn new(events: Q, attendees: A) -> Self {
        Self { events, attendees }
    }
}

#[async_trait]
impl<Q, A> EventRegistrationUseCase for EventRegistrationService<Q, A>
where
    Q: EventQuery + Send + Sync,
    A: AttendeeRepository + Send + Sync,
{
    async fn register(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<Registration, RegistrationError> {
        let slot = self
            .events
            .find_slot(event_id)
            .await?
            .ok_or(RegistrationError::EventNotFound)?;

        if !slot.is_open() {
            return Err(RegistrationError::EventClosed);
        }

        if self.attendees.find(event_id, user_id).await?.is_some() {
            return Err(RegistrationError::AlreadyRegistered);
        }

        let attending = self.attendees.count_attending(event_id).await?;
        let status = AttendeeStatus::for_capacity(attending, slot.max_capacity);

        let registration = self.attendees.insert(event_id, user_id, status).await?;
        info!(%event_id, %user_id, status = %status, "Event registration created");
        Ok(registration)
    }

    async fn cancel(&self, event_id: Uuid, user_id: Uuid) -> Result<(), RegistrationError> {
        if self.events.find_slot(event_id).await?.is_none() {
            return Err(RegistrationError::EventNotFound);
        }

        if !self.attendees.delete(event_id, user_id).await? {
            return Err(RegistrationError::NotRegistered);
        }

        info!(%event_id, %user_id, "Event registration cancelled");
        Ok(())
    }
}
