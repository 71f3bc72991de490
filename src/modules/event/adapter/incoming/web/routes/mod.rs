pub mod admin_sessions;
pub mod event_registration;
pub mod public_events;

pub use admin_sessions::{list_sessions_handler, GameSessionListResponse};
pub use event_registration::{
    cancel_registration_handler, register_for_event_handler, CancelRegistrationResponse,
    RegistrationResponse,
};
pub use public_events::{list_events_handler, EventListResponse};

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_events_handler)
        .service(register_for_event_handler)
        .service(cancel_registration_handler)
        .service(list_sessions_handler);
}
