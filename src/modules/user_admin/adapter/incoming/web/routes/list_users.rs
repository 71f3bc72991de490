use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::application::domain::entities::User;
use crate::shared::api::ApiResponse;
use crate::user_admin::application::use_cases::create_user::{
    AdminCreateUserError, AdminCreateUserInput,
};
use crate::AppState;
use actix_web::{get, post, web, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

/// One row of the admin users table.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserRow {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_email_verified: bool,
    pub is_active: bool,
    #[schema(example = "ACTIVE")]
    pub status: String,
    pub deactivated_at: Option<DateTime<Utc>>,
    pub reactivated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub organization_id: Option<String>,
}

impl From<&User> for AdminUserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role.clone(),
            is_email_verified: user.email_verified,
            is_active: user.is_active,
            status: user.status.to_string(),
            deactivated_at: user.deactivated_at,
            reactivated_at: user.reactivated_at,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
            organization_id: user.organization_id.map(|id| id.to_string()),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct UserListResponse {
    users: Vec<AdminUserRow>,
}

/// List users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin-users",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "All users, newest first", body = inline(SuccessResponse<UserListResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/users")]
pub async fn list_users_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.user_admin.list.execute().await {
        Ok(users) => ApiResponse::success(UserListResponse {
            users: users.iter().map(AdminUserRow::from).collect(),
        }),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[schema(example = "venue_admin")]
    pub role: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AdminCreateUserResponse {
    message: String,
    user: AdminUserRow,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Create a user
///
/// The account is verified and active immediately.
#[utoipa::path(
    post,
    path = "/api/admin/users",
    tag = "admin-users",
    security(("SessionCookie" = [])),
    request_body = AdminCreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<AdminCreateUserResponse>)),
        (status = 400, description = "Missing fields, unknown role or weak password", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
    )
)]
#[post("/api/admin/users")]
pub async fn create_user_handler(
    admin: AdminUser,
    req: web::Json<AdminCreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let (Some(email), Some(first_name), Some(last_name), Some(role), Some(password)) = (
        present(req.email),
        present(req.first_name),
        present(req.last_name),
        present(req.role),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Missing required fields");
    };

    let input = AdminCreateUserInput {
        email,
        first_name,
        last_name,
        role,
        password,
    };

    match data.user_admin.create.execute(input).await {
        Ok(user) => {
            info!(admin_id = %admin.0.id, user_id = %user.id, email = %user.email, "User created by admin");
            ApiResponse::created(AdminCreateUserResponse {
                message: "User created successfully".to_string(),
                user: AdminUserRow::from(&user),
            })
        }
        Err(AdminCreateUserError::Validation(msg)) => {
            warn!(error = %msg, "Rejected admin user creation");
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(AdminCreateUserError::EmailTaken) => {
            ApiResponse::conflict("CONFLICT", "User with this email already exists")
        }
        Err(AdminCreateUserError::Internal(e)) => {
            error!(error = %e, "Admin user creation failed");
            ApiResponse::internal_error()
        }
    }
}

#[derive(Deserialize, IntoParams)]
pub struct CheckEmailQuery {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct CheckEmailResponse {
    exists: bool,
}

/// Check whether an email is registered
#[utoipa::path(
    get,
    path = "/api/admin/users/check-email",
    tag = "admin-users",
    security(("SessionCookie" = [])),
    params(CheckEmailQuery),
    responses(
        (status = 200, description = "Lookup result", body = inline(SuccessResponse<CheckEmailResponse>)),
    )
)]
#[get("/api/admin/users/check-email")]
pub async fn check_email_handler(
    _admin: AdminUser,
    query: web::Query<CheckEmailQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = query.into_inner().email;
    if email.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "Email is required");
    }

    match data.user_admin.check_email.execute(&email).await {
        Ok(exists) => ApiResponse::success(CheckEmailResponse { exists }),
        Err(e) => {
            error!(error = %e, "Email check failed");
            ApiResponse::internal_error()
        }
    }
}
