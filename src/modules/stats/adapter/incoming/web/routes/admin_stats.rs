use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::stats::application::domain::entities::{
    DashboardStats, GameStats, OrganizationStats, SessionStats, UserStats,
};
use crate::stats::application::ports::incoming::use_cases::StatsError;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UserStatsResponse {
    pub stats: UserStats,
}

#[derive(Serialize, ToSchema)]
pub struct GameStatsResponse {
    pub stats: GameStats,
}

#[derive(Serialize, ToSchema)]
pub struct SessionStatsResponse {
    pub stats: SessionStats,
}

#[derive(Serialize, ToSchema)]
pub struct OrganizationStatsResponse {
    pub stats: OrganizationStats,
}

fn stats_failed(err: StatsError, which: &str) -> HttpResponse {
    error!(error = %err, stats = which, "Failed to compute statistics");
    ApiResponse::internal_error()
}

/// Platform totals and the five newest users
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "admin",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = inline(SuccessResponse<DashboardStats>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/stats")]
pub async fn dashboard_stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.stats.admin.dashboard().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => stats_failed(e, "dashboard"),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/users/stats",
    tag = "admin",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "User statistics", body = inline(SuccessResponse<UserStatsResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/users/stats")]
pub async fn user_stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.stats.admin.users().await {
        Ok(stats) => ApiResponse::success(UserStatsResponse { stats }),
        Err(e) => stats_failed(e, "users"),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/games/stats",
    tag = "admin",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Board game statistics", body = inline(SuccessResponse<GameStatsResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/games/stats")]
pub async fn game_stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.stats.admin.games().await {
        Ok(stats) => ApiResponse::success(GameStatsResponse { stats }),
        Err(e) => stats_failed(e, "games"),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/sessions/stats",
    tag = "admin",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Game session statistics", body = inline(SuccessResponse<SessionStatsResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/sessions/stats")]
pub async fn session_stats_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.stats.admin.sessions().await {
        Ok(stats) => ApiResponse::success(SessionStatsResponse { stats }),
        Err(e) => stats_failed(e, "sessions"),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/organizations/stats",
    tag = "admin",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Organization statistics", body = inline(SuccessResponse<OrganizationStatsResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/organizations/stats")]
pub async fn organization_stats_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.stats.admin.organizations().await {
        Ok(stats) => ApiResponse::success(OrganizationStatsResponse { stats }),
        Err(e) => stats_failed(e, "organizations"),
    }
}
