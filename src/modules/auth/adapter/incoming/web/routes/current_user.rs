use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::{AdminUser, CurrentUser};
use crate::auth::application::domain::entities::User;
use crate::shared::api::ApiResponse;
use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

/// The signed-in user as the front ends see it.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    #[schema(example = "Casey Meeple")]
    pub name: String,
    #[schema(example = "casey@example.com")]
    pub email: String,
    #[schema(example = "end_user")]
    pub role: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&User> for SessionUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.full_name(),
            email: user.email.clone(),
            role: user.role.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MeResponse {
    pub user: SessionUserResponse,
}

/// Current user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Signed-in user", body = inline(SuccessResponse<MeResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn me_handler(user: CurrentUser) -> impl Responder {
    ApiResponse::success(MeResponse {
        user: SessionUserResponse::from(&user.0),
    })
}

/// Current admin
#[utoipa::path(
    get,
    path = "/api/admin/auth/me",
    tag = "admin-auth",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Signed-in admin", body = inline(SuccessResponse<MeResponse>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Not an admin", body = ErrorResponse),
    )
)]
#[get("/api/admin/auth/me")]
pub async fn admin_me_handler(admin: AdminUser) -> impl Responder {
    ApiResponse::success(MeResponse {
        user: SessionUserResponse::from(&admin.0),
    })
}
