pub mod event_attendees;
pub mod events;
