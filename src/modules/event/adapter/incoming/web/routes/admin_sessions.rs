use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::event::application::domain::entities::GameSession;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct GameSessionListResponse {
    pub sessions: Vec<GameSession>,
}

/// Active events of every type with their attending head count
#[utoipa::path(
    get,
    path = "/api/admin/sessions",
    tag = "admin",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Game sessions", body = inline(SuccessResponse<GameSessionListResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/sessions")]
pub async fn list_sessions_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.events.list_sessions.execute().await {
        Ok(sessions) => ApiResponse::success(GameSessionListResponse { sessions }),
        Err(e) => {
            error!(error = %e, "Failed to list game sessions");
            ApiResponse::internal_error()
        }
    }
}
