use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::session_cookie::SESSION_COOKIE_NAME;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SBR API",
        version = "1.0.0",
        description = "Backend API for SBR - Social Board Gaming",
        contact(
            name = "API Support",
            email = "support@shakebattleroll.com"
        )
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::register_user::signup_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::logout_user_handler,
        crate::auth::adapter::incoming::web::routes::current_user::me_handler,
        crate::auth::adapter::incoming::web::routes::verify_email::verify_user_email_handler,
        crate::auth::adapter::incoming::web::routes::password_reset::forgot_password_handler,
        crate::auth::adapter::incoming::web::routes::password_reset::reset_password_handler,
        crate::auth::adapter::incoming::web::routes::login_user::admin_login_handler,
        crate::auth::adapter::incoming::web::routes::logout_user::admin_logout_handler,
        crate::auth::adapter::incoming::web::routes::current_user::admin_me_handler,

        // Admin users
        crate::user_admin::adapter::incoming::web::routes::list_users::list_users_handler,
        crate::user_admin::adapter::incoming::web::routes::list_users::create_user_handler,
        crate::user_admin::adapter::incoming::web::routes::list_users::check_email_handler,
        crate::user_admin::adapter::incoming::web::routes::user_actions::user_action_handler,
        crate::user_admin::adapter::incoming::web::routes::user_status::toggle_status_handler,
        crate::user_admin::adapter::incoming::web::routes::user_status::update_status_handler,
        crate::user_admin::adapter::incoming::web::routes::user_status::get_status_handler,
        crate::user_admin::adapter::incoming::web::routes::bootstrap_admin::create_admin_handler,

        // Organizations
        crate::organization::adapter::incoming::web::routes::public_organizations::list_organizations_handler,
        crate::organization::adapter::incoming::web::routes::public_organizations::get_organization_handler,
        crate::organization::adapter::incoming::web::routes::follow_organization::follow_organization_handler,
        crate::organization::adapter::incoming::web::routes::follow_organization::unfollow_organization_handler,
        crate::organization::adapter::incoming::web::routes::follow_organization::follow_status_handler,
        crate::organization::adapter::incoming::web::routes::admin_organizations::admin_list_organizations_handler,
        crate::organization::adapter::incoming::web::routes::admin_organizations::create_organization_handler,
        crate::organization::adapter::incoming::web::routes::admin_organizations::update_organization_handler,
        crate::organization::adapter::incoming::web::routes::admin_organizations::delete_organization_handler,

        // Events
        crate::event::adapter::incoming::web::routes::public_events::list_events_handler,
        crate::event::adapter::incoming::web::routes::event_registration::register_for_event_handler,
        crate::event::adapter::incoming::web::routes::event_registration::cancel_registration_handler,
        crate::event::adapter::incoming::web::routes::admin_sessions::list_sessions_handler,

        // Board games
        crate::board_game::adapter::incoming::web::routes::admin_games::list_games_handler,
        crate::board_game::adapter::incoming::web::routes::admin_games::search_bgg_handler,
        crate::board_game::adapter::incoming::web::routes::game_sync::sync_games_handler,
        crate::board_game::adapter::incoming::web::routes::game_sync::sync_history_handler,

        // Stats
        crate::stats::adapter::incoming::web::routes::admin_stats::dashboard_stats_handler,
        crate::stats::adapter::incoming::web::routes::admin_stats::user_stats_handler,
        crate::stats::adapter::incoming::web::routes::admin_stats::game_stats_handler,
        crate::stats::adapter::incoming::web::routes::admin_stats::session_stats_handler,
        crate::stats::adapter::incoming::web::routes::admin_stats::organization_stats_handler,
        crate::stats::adapter::incoming::web::routes::dashboard_stats::web_dashboard_stats_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Sign-up, login and session endpoints"),
        (name = "admin-auth", description = "Admin panel login and session endpoints"),
        (name = "admin-users", description = "User management for admins"),
        (name = "organizations", description = "Organizations and followers"),
        (name = "admin-organizations", description = "Organization management for admins"),
        (name = "events", description = "Public events and registrations"),
        (name = "admin", description = "Game sessions, board game catalogue, BGG sync and statistics"),
        (name = "dashboard", description = "Statistics for the signed-in player"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    SESSION_COOKIE_NAME,
                    "Session token issued by the login endpoints",
                ))),
            )
        }
    }
}
