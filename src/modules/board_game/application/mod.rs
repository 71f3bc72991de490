pub mod board_game_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use board_game_use_cases::BoardGameUseCases;
