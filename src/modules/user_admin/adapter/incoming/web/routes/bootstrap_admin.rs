use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user_admin::adapter::incoming::web::routes::list_users::AdminUserRow;
use crate::user_admin::application::use_cases::bootstrap_admin::BootstrapOutcome;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct BootstrapAdminResponse {
    message: String,
    user: AdminUserRow,
}

/// Create the configured super admin
///
/// Idempotent: answers with the existing account when it is already there.
#[utoipa::path(
    post,
    path = "/api/admin/create-admin",
    tag = "admin-users",
    responses(
        (status = 200, description = "Admin already exists", body = inline(SuccessResponse<BootstrapAdminResponse>)),
        (status = 201, description = "Admin created", body = inline(SuccessResponse<BootstrapAdminResponse>)),
        (status = 500, description = "Admin could not be created", body = ErrorResponse),
    )
)]
#[post("/api/admin/create-admin")]
pub async fn create_admin_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user_admin.bootstrap_admin.execute().await {
        Ok(BootstrapOutcome::AlreadyExists(user)) => ApiResponse::success(BootstrapAdminResponse {
            message: "Admin user already exists".to_string(),
            user: AdminUserRow::from(&user),
        }),
        Ok(BootstrapOutcome::Created(user)) => ApiResponse::created(BootstrapAdminResponse {
            message: "Admin user created successfully".to_string(),
            user: AdminUserRow::from(&user),
        }),
        Err(e) => {
            error!(error = %e, "Admin bootstrap failed");
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "Failed to create admin user",
            )
        }
    }
}
