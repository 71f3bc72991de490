pub mod create_user;
pub mod login_user;
pub mod logout_user;
pub mod request_password_reset;
pub mod reset_password;
pub mod resolve_session;
pub mod verify_user_email;
