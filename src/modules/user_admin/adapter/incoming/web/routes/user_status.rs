use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::{StatusLog, UserStatus};
use crate::shared::api::ApiResponse;
use crate::user_admin::adapter::incoming::web::routes::list_users::AdminUserRow;
use crate::user_admin::application::use_cases::change_status::{
    ChangeStatusCommand, ChangeStatusError, StatusChange,
};
use crate::user_admin::application::use_cases::status_history::UserStatusHistoryError;
use crate::AppState;
use actix_web::{get, patch, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct StatusChangeResponse {
    message: String,
    user: AdminUserRow,
}

async fn change_status(
    data: &AppState,
    command: ChangeStatusCommand,
) -> HttpResponse {
    let user_id = command.user_id;
    match data.user_admin.change_status.execute(command).await {
        Ok(user) => ApiResponse::success(StatusChangeResponse {
            message: format!("User status updated to {}", user.status),
            user: AdminUserRow::from(&user),
        }),
        Err(ChangeStatusError::UserNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "User not found")
        }
        Err(ChangeStatusError::SelfDeactivation) => {
            warn!(%user_id, "Admin attempted to deactivate own account");
            ApiResponse::bad_request(
                "SELF_ACTION_FORBIDDEN",
                "You cannot deactivate your own account",
            )
        }
        Err(ChangeStatusError::Internal(e)) => {
            error!(%user_id, error = %e, "Status change failed");
            ApiResponse::internal_error()
        }
    }
}

/// Toggle between active and inactive
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/toggle-status",
    tag = "admin-users",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Status flipped", body = inline(SuccessResponse<StatusChangeResponse>)),
        (status = 400, description = "Self-deactivation", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[post("/api/admin/users/{id}/toggle-status")]
pub async fn toggle_status_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    change_status(
        &data,
        ChangeStatusCommand {
            user_id: path.into_inner(),
            actor_id: admin.0.id,
            change: StatusChange::Toggle,
            reason: None,
        },
    )
    .await
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(example = "INACTIVE")]
    pub status: String,
    pub reason: Option<String>,
}

/// Set a user's status
///
/// `INACTIVE` and `SUSPENDED` end every session the user holds.
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/status",
    tag = "admin-users",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = inline(SuccessResponse<StatusChangeResponse>)),
        (status = 400, description = "Unknown status or self-deactivation", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[patch("/api/admin/users/{id}/status")]
pub async fn update_status_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateStatusRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let Ok(status) = req.status.parse::<UserStatus>() else {
        return ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Invalid status. Must be one of: ACTIVE, INACTIVE, SUSPENDED, PENDING_VERIFICATION",
        );
    };

    change_status(
        &data,
        ChangeStatusCommand {
            user_id: path.into_inner(),
            actor_id: admin.0.id,
            change: StatusChange::Set(status),
            reason: req.reason.filter(|r| !r.trim().is_empty()),
        },
    )
    .await
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusResponse {
    user: AdminUserRow,
    #[schema(value_type = Vec<Object>)]
    status_logs: Vec<StatusLog>,
}

/// Status and status history of a user
#[utoipa::path(
    get,
    path = "/api/admin/users/{id}/status",
    tag = "admin-users",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Status with logs, newest first", body = inline(SuccessResponse<UserStatusResponse>)),
        (status = 404, description = "User not found", body = ErrorResponse),
    )
)]
#[get("/api/admin/users/{id}/status")]
pub async fn get_status_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();
    match data.user_admin.status_history.execute(user_id).await {
        Ok(history) => ApiResponse::success(UserStatusResponse {
            user: AdminUserRow::from(&history.user),
            status_logs: history.logs,
        }),
        Err(UserStatusHistoryError::UserNotFound) => {
            ApiResponse::not_found("NOT_FOUND", "User not found")
        }
        Err(UserStatusHistoryError::Internal(e)) => {
            error!(%user_id, error = %e, "Failed to load status history");
            ApiResponse::internal_error()
        }
    }
}
