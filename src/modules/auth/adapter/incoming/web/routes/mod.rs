pub mod current_user;
pub mod login_user;
pub mod logout_user;
pub mod password_reset;
pub mod register_user;
pub mod verify_email;

pub use current_user::{admin_me_handler, me_handler, MeResponse, SessionUserResponse};
pub use login_user::{admin_login_handler, login_user_handler, LoginRequestDto, LoginResponse};
pub use logout_user::{admin_logout_handler, logout_user_handler, LogoutResponseBody};
pub use password_reset::{
    forgot_password_handler, reset_password_handler, ForgotPasswordRequest, MessageResponse,
    ResetPasswordRequest,
};
pub use register_user::{signup_handler, SignedUpUser, SignupRequest, SignupResponse};
pub use verify_email::{verify_user_email_handler, VerifyEmailResponse};

use actix_web::web;

/// Public and admin authentication endpoints.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(signup_handler)
        .service(login_user_handler)
        .service(logout_user_handler)
        .service(me_handler)
        .service(verify_user_email_handler)
        .service(forgot_password_handler)
        .service(reset_password_handler)
        .service(admin_login_handler)
        .service(admin_logout_handler)
        .service(admin_me_handler);
}
