use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::CurrentUser;
use crate::shared::api::ApiResponse;
use crate::stats::application::domain::entities::WebDashboardStats;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Catalogue size plus the caller's own session and co-player counts
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "dashboard",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Personal dashboard", body = inline(SuccessResponse<WebDashboardStats>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
    )
)]
#[get("/api/dashboard/stats")]
pub async fn web_dashboard_stats_handler(
    user: CurrentUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let CurrentUser(user) = user;
    match data.stats.dashboard.execute(user.id).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => {
            error!(user_id = %user.id, error = %e, "Failed to compute dashboard stats");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::test_fixtures::sample_user;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::{InMemorySessions, InMemoryUsers};
    use crate::tests::support::in_memory_stats::FixedStats;
    use crate::tests::support::sign_in;
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_stats_are_scoped_to_caller() {
        let user = sample_user();
        let user_id = user.id;
        let sessions = InMemorySessions::default();
        let token = sign_in(&sessions, user.id);
        let stats = FixedStats::default();
        stats.set_web(WebDashboardStats {
            total_games: 12,
            total_sessions: 3,
            total_players: 5,
            recent_activity: vec![],
        });
        let state = TestAppStateBuilder::default()
            .with_users(InMemoryUsers::with(vec![user]))
            .with_sessions(sessions)
            .with_stats(stats.clone())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web_dashboard_stats_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/dashboard/stats")
            .cookie(Cookie::new("sbr-session", token))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["totalPlayers"], 5);
        assert_eq!(stats.web_requests(), vec![user_id]);
    }

    #[actix_web::test]
    async fn test_anonymous_caller_is_rejected() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(web_dashboard_stats_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/dashboard/stats").to_request();

        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
