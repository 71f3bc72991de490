pub mod domain;
pub mod organization_use_cases;
pub mod ports;
pub mod services;

pub use organization_use_cases::OrganizationUseCases;
