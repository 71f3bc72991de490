use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::user_admin::adapter::incoming::web::routes::list_users::AdminUserRow;
use crate::user_admin::application::use_cases::user_actions::{
    UserAction, UserActionError, UserActionOutcome, UserEdit,
};
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserActionData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UserActionRequest {
    /// One of `view`, `edit`, `reset_password`, `lock`, `unlock`, `delete`
    #[schema(example = "lock")]
    pub action: String,
    pub data: Option<UserActionData>,
}

#[derive(Serialize, ToSchema)]
pub struct UserActionResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<AdminUserRow>,
}

fn parse_action(action: &str, data: UserActionData) -> Option<UserAction> {
    Some(match action {
        "view" => UserAction::View,
        "edit" => UserAction::Edit(UserEdit {
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            role: data.role,
        }),
        "reset_password" => UserAction::ResetPassword {
            new_password: data.new_password.unwrap_or_default(),
        },
        "lock" => UserAction::Lock,
        "unlock" => UserAction::Unlock,
        "delete" => UserAction::Delete,
        _ => return None,
    })
}

fn respond(outcome: UserActionOutcome) -> HttpResponse {
    let (message, user) = match outcome {
        UserActionOutcome::Viewed(user) => ("User retrieved", Some(user)),
        UserActionOutcome::Updated(user) => ("User updated successfully", Some(user)),
        UserActionOutcome::PasswordReset => ("Password reset successfully", None),
        UserActionOutcome::Locked(user) => ("User locked successfully", Some(user)),
        UserActionOutcome::Unlocked(user) => ("User unlocked successfully", Some(user)),
        UserActionOutcome::Deleted => ("User deleted successfully", None),
    };

    ApiResponse::success(UserActionResponse {
        message: message.to_string(),
        user: user.as_ref().map(AdminUserRow::from),
    })
}

/// Apply an admin action to a user
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/actions",
    tag = "admin-users",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UserActionRequest,
    responses(
        (status = 200, description = "Action applied", body = inline(SuccessResponse<UserActionResponse>)),
        (status = 400, description = "Invalid action, invalid data or self-targeted action", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[post("/api/admin/users/{id}/actions")]
pub async fn user_action_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UserActionRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    let req = req.into_inner();

    let Some(action) = parse_action(&req.action, req.data.unwrap_or_default()) else {
        warn!(action = %req.action, "Unknown admin user action");
        return ApiResponse::bad_request("INVALID_ACTION", "Invalid action");
    };

    info!(admin_id = %admin.0.id, %user_id, action = %req.action, "Admin user action");

    match data.user_admin.actions.execute(user_id, admin.0.id, action).await {
        Ok(outcome) => respond(outcome),
        Err(UserActionError::UserNotFound) => ApiResponse::not_found("NOT_FOUND", "User not found"),
        Err(UserActionError::Validation(msg)) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        Err(UserActionError::SelfAction(msg)) => {
            ApiResponse::bad_request("SELF_ACTION_FORBIDDEN", &msg)
        }
        Err(UserActionError::EmailTaken) => {
            ApiResponse::conflict("CONFLICT", "User with this email already exists")
        }
        Err(UserActionError::Internal(e)) => {
            error!(%user_id, error = %e, "Admin user action failed");
            ApiResponse::internal_error()
        }
    }
}
