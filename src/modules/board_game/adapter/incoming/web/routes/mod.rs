pub mod admin_games;
pub mod game_sync;

pub use admin_games::{
    list_games_handler, search_bgg_handler, BggSearchQuery, BggSearchResponse,
    BoardGameListResponse,
};
pub use game_sync::{
    sync_games_handler, sync_history_handler, FullSyncResponse, SearchSyncResponse,
    SingleSyncResponse, SyncHistoryResponse, SyncRequest,
};

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_games_handler)
        .service(search_bgg_handler)
        .service(sync_games_handler)
        .service(sync_history_handler);
}
