use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::board_game::application::domain::entities::{BggSearchResult, BoardGame};
use crate::board_game::application::ports::incoming::use_cases::GameSyncError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct BoardGameListResponse {
    pub games: Vec<BoardGame>,
}

#[derive(Deserialize, IntoParams)]
pub struct BggSearchQuery {
    /// Free-text game name
    pub q: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct BggSearchResponse {
    pub results: Vec<BggSearchResult>,
    pub query: String,
}

/// Shared mapping for every route that talks to BGG.
pub fn map_sync_error(err: GameSyncError) -> HttpResponse {
    match err {
        GameSyncError::Validation(msg) => ApiResponse::bad_request("VALIDATION_ERROR", &msg),
        GameSyncError::GameNotFound => ApiResponse::not_found("NOT_FOUND", "Game not found on BGG"),
        GameSyncError::BggUnavailable(e) => {
            warn!(error = %e, "BGG request failed");
            ApiResponse::bad_gateway("BGG_UNAVAILABLE", "BoardGameGeek is unavailable")
        }
        GameSyncError::Internal(e) => {
            error!(error = %e, "Game sync failed");
            ApiResponse::internal_error()
        }
    }
}

/// Board game catalogue ordered by name
#[utoipa::path(
    get,
    path = "/api/admin/games",
    tag = "admin",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Catalogue", body = inline(SuccessResponse<BoardGameListResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/games")]
pub async fn list_games_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.board_games.list.execute().await {
        Ok(games) => ApiResponse::success(BoardGameListResponse { games }),
        Err(e) => {
            error!(error = %e, "Failed to list board games");
            ApiResponse::internal_error()
        }
    }
}

/// Search BoardGameGeek by name
#[utoipa::path(
    get,
    path = "/api/admin/games/search-bgg",
    tag = "admin",
    security(("SessionCookie" = [])),
    params(BggSearchQuery),
    responses(
        (status = 200, description = "BGG matches", body = inline(SuccessResponse<BggSearchResponse>)),
        (status = 400, description = "Missing query", body = ErrorResponse),
        (status = 502, description = "BGG unavailable", body = ErrorResponse),
    )
)]
#[get("/api/admin/games/search-bgg")]
pub async fn search_bgg_handler(
    _admin: AdminUser,
    query: web::Query<BggSearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner().q.unwrap_or_default();

    match data.board_games.search_bgg.execute(&query).await {
        Ok(results) => ApiResponse::success(BggSearchResponse {
            results,
            query: query.trim().to_string(),
        }),
        Err(e) => map_sync_error(e),
    }
}
