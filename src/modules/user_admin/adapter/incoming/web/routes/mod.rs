pub mod bootstrap_admin;
pub mod list_users;
pub mod user_actions;
pub mod user_status;

pub use bootstrap_admin::{create_admin_handler, BootstrapAdminResponse};
pub use list_users::{
    check_email_handler, create_user_handler, list_users_handler, AdminCreateUserRequest,
    AdminCreateUserResponse, AdminUserRow, CheckEmailResponse, UserListResponse,
};
pub use user_actions::{user_action_handler, UserActionData, UserActionRequest, UserActionResponse};
pub use user_status::{
    get_status_handler, toggle_status_handler, update_status_handler, StatusChangeResponse,
    UpdateStatusRequest, UserStatusResponse,
};

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users_handler)
        .service(create_user_handler)
        .service(check_email_handler)
        .service(user_action_handler)
        .service(toggle_status_handler)
        .service(update_status_handler)
        .service(get_status_handler)
        .service(create_admin_handler);
}
