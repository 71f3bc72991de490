pub mod bootstrap_admin;
pub mod change_status;
pub mod check_email;
pub mod create_user;
pub mod list_users;
pub mod status_history;
pub mod user_actions;
