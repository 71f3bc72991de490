pub mod attendee_repository;
pub mod event_query;

pub use attendee_repository::{AttendeeRepository, AttendeeRepositoryError};
pub use event_query::{EventQuery, EventQueryError};
