pub mod auth;
pub mod board_game;
pub mod email;
pub mod event;
pub mod organization;
pub mod stats;
pub mod user_admin;
