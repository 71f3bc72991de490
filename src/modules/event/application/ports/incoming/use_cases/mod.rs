pub mod event_registration;
pub mod list_events;

pub use event_registration::{EventRegistrationUseCase, RegistrationError};
pub use list_events::{ListEventsError, ListGameSessionsUseCase, ListPublicEventsUseCase};
