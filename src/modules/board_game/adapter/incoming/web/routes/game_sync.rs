use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::board_game::adapter::incoming::web::routes::admin_games::map_sync_error;
use crate::board_game::application::domain::entities::{
    BggSearchResult, BoardGame, GameSyncRun, SyncType, UpsertOutcome,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// `single`, `search` or `full`
    #[serde(rename = "type", default)]
    pub sync_type: Option<String>,
    #[serde(default)]
    pub bgg_id: Option<i32>,
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct SingleSyncResponse {
    pub message: String,
    pub game: BoardGame,
}

#[derive(Serialize, ToSchema)]
pub struct SearchSyncResponse {
    pub results: Vec<BggSearchResult>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FullSyncResponse {
    pub message: String,
    pub sync_id: Uuid,
}

#[derive(Serialize, ToSchema)]
pub struct SyncHistoryResponse {
    pub history: Vec<GameSyncRun>,
}

/// What a sync request resolves to once its fields are checked.
enum SyncCommand {
    Single(i32),
    Search(String),
    Full,
}

fn parse_request(body: SyncRequest) -> Option<SyncCommand> {
    let sync_type = body.sync_type?.parse::<SyncType>().ok()?;
    match sync_type {
        SyncType::Single => body.bgg_id.map(SyncCommand::Single),
        SyncType::Search => body
            .query
            .filter(|q| !q.trim().is_empty())
            .map(SyncCommand::Search),
        SyncType::Full => Some(SyncCommand::Full),
    }
}

/// Pull games from BoardGameGeek into the catalogue
#[utoipa::path(
    post,
    path = "/api/admin/games/sync",
    tag = "admin",
    security(("SessionCookie" = [])),
    request_body = SyncRequest,
    responses(
        (status = 200, description = "Single or search sync finished", body = inline(SuccessResponse<SingleSyncResponse>)),
        (status = 202, description = "Full sync started", body = inline(SuccessResponse<FullSyncResponse>)),
        (status = 400, description = "Invalid sync type", body = ErrorResponse),
        (status = 404, description = "Game not found on BGG", body = ErrorResponse),
        (status = 502, description = "BGG unavailable", body = ErrorResponse),
    )
)]
#[post("/api/admin/games/sync")]
pub async fn sync_games_handler(
    admin: AdminUser,
    body: web::Json<SyncRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let AdminUser(admin) = admin;
    let Some(command) = parse_request(body.into_inner()) else {
        return ApiResponse::bad_request("INVALID_SYNC_TYPE", "Invalid sync type");
    };
    let sync = &data.board_games.sync;

    match command {
        SyncCommand::Single(bgg_id) => match sync.sync_single(bgg_id).await {
            Ok(outcome) => {
                info!(bgg_id, admin_id = %admin.id, "Single game sync");
                let message = match outcome {
                    UpsertOutcome::Created(_) => "Game synced successfully",
                    UpsertOutcome::Updated(_) => "Game updated successfully",
                };
                ApiResponse::success(SingleSyncResponse {
                    message: message.to_string(),
                    game: outcome.into_game(),
                })
            }
            Err(e) => map_sync_error(e),
        },
        SyncCommand::Search(query) => match sync.sync_search(&query).await {
            Ok(results) => ApiResponse::success(SearchSyncResponse { results }),
            Err(e) => map_sync_error(e),
        },
        SyncCommand::Full => match sync.start_full_sync().await {
            Ok(run) => {
                info!(sync_id = %run.id, admin_id = %admin.id, "Full BGG sync started");
                ApiResponse::accepted(FullSyncResponse {
                    message: "Full sync initiated".to_string(),
                    sync_id: run.id,
                })
            }
            Err(e) => map_sync_error(e),
        },
    }
}

/// The 20 most recent sync runs, newest first
#[utoipa::path(
    get,
    path = "/api/admin/games/sync-history",
    tag = "admin",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Sync runs", body = inline(SuccessResponse<SyncHistoryResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/games/sync-history")]
pub async fn sync_history_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.board_games.sync.history().await {
        Ok(history) => ApiResponse::success(SyncHistoryResponse { history }),
        Err(e) => map_sync_error(e),
    }
}
