pub mod user_registration;

pub use user_registration::{UserRegistrationOrchestrator, UserRegistrationOutput};
