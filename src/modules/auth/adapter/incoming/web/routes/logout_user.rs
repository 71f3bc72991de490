use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::session_cookie::{session_token, with_cookie};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out successfully")]
    message: String,
}

async fn logout(req: &HttpRequest, data: &AppState) -> HttpResponse {
    if let Some(token) = session_token(req) {
        match data.auth.logout.execute(&token).await {
            Ok(()) => info!("Session ended"),
            // The cookie is cleared either way; a leftover row still expires.
            Err(e) => error!(error = %e, "Failed to delete session"),
        }
    }

    with_cookie(
        ApiResponse::success(LogoutResponseBody {
            message: "Logged out successfully".to_string(),
        }),
        data.session_cookie.clear(),
    )
}

/// Logout
///
/// Deletes the session behind the cookie, if any, and expires the cookie.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    logout(&req, &data).await
}

/// Admin panel logout
#[utoipa::path(
    post,
    path = "/api/admin/auth/logout",
    tag = "admin-auth",
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponseBody>)),
    )
)]
#[post("/api/admin/auth/logout")]
pub async fn admin_logout_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    logout(&req, &data).await
}
