pub mod sessions;
pub mod user_status_logs;
pub mod users;
