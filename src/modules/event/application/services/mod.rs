pub mod event_registration_service;
pub mod list_events_service;

pub use event_registration_service::EventRegistrationService;
pub use list_events_service::{ListGameSessionsService, ListPublicEventsService};
