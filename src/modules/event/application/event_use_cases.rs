use std::sync::Arc;

use crate::event::application::ports::incoming::use_cases::{
    EventRegistrationUseCase, ListGameSessionsUseCase, ListPublicEventsUseCase,
};

#[derive(Clone)]
pub struct EventUseCases {
    pub list_public: Arc<dyn ListPublicEventsUseCase + Send + Sync>,
    pub list_sessions: Arc<dyn ListGameSessionsUseCase + Send + Sync>,
    pub registration: Arc<dyn EventRegistrationUseCase + Send + Sync>,
}
