pub mod admin_stats;
pub mod dashboard_stats;

pub use admin_stats::{
    dashboard_stats_handler, game_stats_handler, organization_stats_handler,
    session_stats_handler, user_stats_handler, GameStatsResponse, OrganizationStatsResponse,
    SessionStatsResponse, UserStatsResponse,
};
pub use dashboard_stats::web_dashboard_stats_handler;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard_stats_handler)
        .service(user_stats_handler)
        .service(game_stats_handler)
        .service(session_stats_handler)
        .service(organization_stats_handler)
        .service(web_dashboard_stats_handler);
}
