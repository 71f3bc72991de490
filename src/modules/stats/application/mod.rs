pub mod domain;
pub mod ports;
pub mod services;
pub mod stats_use_cases;

pub use stats_use_cases::StatsUseCases;
