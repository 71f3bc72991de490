use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::event::application::domain::entities::{
    Attendee, AttendeeStatus, EventListing, EventSlot, Registration, EVENT_STATUS_ACTIVE,
    EVENT_TYPE_PUBLIC,
};
use crate::event::application::ports::outgoing::{
    AttendeeRepository, AttendeeRepositoryError, EventQuery, EventQueryError,
};

/// Events and their attendees; implements both event ports.
#[derive(Clone, Default)]
pub struct InMemoryEvents {
    events: Arc<Mutex<Vec<EventListing>>>,
    fail: bool,
}

impl InMemoryEvents {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn add(&self, event: EventListing) -> EventListing {
        self.events.lock().unwrap().push(event.clone());
        event
    }

    pub fn attendees_of(&self, event_id: Uuid) -> Vec<Attendee> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == event_id)
            .map(|e| e.attendees.clone())
            .unwrap_or_default()
    }

    fn sorted(&self, pred: impl Fn(&EventListing) -> bool) -> Result<Vec<EventListing>, EventQueryError> {
        if self.fail {
            return Err(EventQueryError::DatabaseError("database unavailable".to_string()));
        }
        let mut events: Vec<EventListing> = self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| pred(e))
            .cloned()
            .collect();
        events.sort_by_key(|e| e.start_time);
        Ok(events)
    }
}

#[async_trait]
impl EventQuery for InMemoryEvents {
    async fn list_public(&self) -> Result<Vec<EventListing>, EventQueryError> {
        self.sorted(|e| e.status == EVENT_STATUS_ACTIVE && e.event_type == EVENT_TYPE_PUBLIC)
    }

    async fn list_active(&self) -> Result<Vec<EventListing>, EventQueryError> {
        self.sorted(|e| e.status == EVENT_STATUS_ACTIVE)
    }

    async fn find_slot(&self, event_id: Uuid) -> Result<Option<EventSlot>, EventQueryError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == event_id)
            .map(|e| EventSlot {
                id: e.id,
                status: e.status.clone(),
                max_capacity: e.max_capacity,
            }))
    }
}

#[async_trait]
impl AttendeeRepository for InMemoryEvents {
    async fn find(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Registration>, AttendeeRepositoryError> {
        Ok(self
            .attendees_of(event_id)
            .into_iter()
            .find(|a| a.user_id == user_id)
            .map(|a| Registration {
                id: Uuid::new_v4(),
                event_id,
                user_id,
                status: a.status,
                created_at: Utc::now(),
            }))
    }

    async fn count_attending(&self, event_id: Uuid) -> Result<u64, AttendeeRepositoryError> {
        Ok(self
            .attendees_of(event_id)
            .iter()
            .filter(|a| a.status == AttendeeStatus::Attending)
            .count() as u64)
    }

    async fn insert(
        &self,
        event_id: Uuid,
        user_id: Uuid,
        status: AttendeeStatus,
    ) -> Result<Registration, AttendeeRepositoryError> {
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| AttendeeRepositoryError::DatabaseError("fk violation".to_string()))?;
        if event.attendees.iter().any(|a| a.user_id == user_id) {
            return Err(AttendeeRepositoryError::AlreadyRegistered);
        }
        event.attendees.push(Attendee {
            user_id,
            first_name: "Test".to_string(),
            last_name: "Player".to_string(),
            status,
        });
        Ok(Registration {
            id: Uuid::new_v4(),
            event_id,
            user_id,
            status,
            created_at: Utc::now(),
        })
    }

    async fn delete(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, AttendeeRepositoryError> {
        let mut events = self.events.lock().unwrap();
        let Some(event) = events.iter_mut().find(|e| e.id == event_id) else {
            return Ok(false);
        };
        let before = event.attendees.len();
        event.attendees.retain(|a| a.user_id != user_id);
        Ok(event.attendees.len() != before)
    }
}
