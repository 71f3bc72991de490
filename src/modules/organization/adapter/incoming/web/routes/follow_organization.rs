use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::OptionalUser;
use crate::organization::application::ports::incoming::use_cases::FollowError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct FollowResponse {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FollowStatusResponse {
    pub is_following: bool,
}

fn authentication_required() -> HttpResponse {
    ApiResponse::unauthorized("UNAUTHORIZED", "Authentication required")
}

fn map_follow_error(err: FollowError, organization_id: Uuid) -> HttpResponse {
    match err {
        FollowError::OrganizationNotFound => {
            ApiResponse::not_found("NOT_FOUND", "Organization not found")
        }
        FollowError::AlreadyFollowing => {
            ApiResponse::conflict("CONFLICT", "Already following this organization")
        }
        FollowError::NotFollowing => {
            ApiResponse::not_found("NOT_FOUND", "Not following this organization")
        }
        FollowError::Internal(e) => {
            error!(%organization_id, error = %e, "Follow operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Follow an organization
#[utoipa::path(
    post,
    path = "/api/organizations/{id}/follow",
    tag = "organizations",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Now following", body = inline(SuccessResponse<FollowResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
        (status = 409, description = "Already following", body = ErrorResponse),
    )
)]
#[post("/api/organizations/{id}/follow")]
pub async fn follow_organization_handler(
    user: OptionalUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let OptionalUser(Some(user)) = user else {
        return authentication_required();
    };
    let organization_id = path.into_inner();

    match data.organizations.follow.follow(user.id, organization_id).await {
        Ok(()) => ApiResponse::success(FollowResponse {
            message: "Successfully followed organization".to_string(),
        }),
        Err(e) => {
            warn!(user_id = %user.id, %organization_id, error = %e, "Follow rejected");
            map_follow_error(e, organization_id)
        }
    }
}

/// Stop following an organization
#[utoipa::path(
    delete,
    path = "/api/organizations/{id}/follow",
    tag = "organizations",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 200, description = "No longer following", body = inline(SuccessResponse<FollowResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Not following", body = ErrorResponse),
    )
)]
#[delete("/api/organizations/{id}/follow")]
pub async fn unfollow_organization_handler(
    user: OptionalUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let OptionalUser(Some(user)) = user else {
        return authentication_required();
    };
    let organization_id = path.into_inner();

    match data.organizations.follow.unfollow(user.id, organization_id).await {
        Ok(()) => ApiResponse::success(FollowResponse {
            message: "Successfully unfollowed organization".to_string(),
        }),
        Err(e) => map_follow_error(e, organization_id),
    }
}

/// Whether the caller follows an organization; anonymous callers get `false`
#[utoipa::path(
    get,
    path = "/api/organizations/{id}/follow-status",
    tag = "organizations",
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Follow status", body = inline(SuccessResponse<FollowStatusResponse>)),
    )
)]
#[get("/api/organizations/{id}/follow-status")]
pub async fn follow_status_handler(
    user: OptionalUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let OptionalUser(Some(user)) = user else {
        return ApiResponse::success(FollowStatusResponse {
            is_following: false,
        });
    };
    let organization_id = path.into_inner();

    match data
        .organizations
        .follow
        .is_following(user.id, organization_id)
        .await
    {
        Ok(is_following) => ApiResponse::success(FollowStatusResponse { is_following }),
        Err(e) => map_follow_error(e, organization_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::test_fixtures::sample_user;
    use crate::organization::application::domain::entities::test_fixtures::sample_organization;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::{InMemorySessions, InMemoryUsers};
    use crate::tests::support::in_memory_organizations::InMemoryOrganizations;
    use crate::tests::support::sign_in;
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_follow_flow() {
        let user = sample_user();
        let sessions = InMemorySessions::default();
        let token = sign_in(&sessions, user.id);
        let store = InMemoryOrganizations::default();
        let org = store.add(sample_organization("Pawn Shop Games"));
        let state = TestAppStateBuilder::default()
            .with_users(InMemoryUsers::with(vec![user]))
            .with_sessions(sessions)
            .with_organizations(store)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(follow_organization_handler)
                .service(unfollow_organization_handler)
                .service(follow_status_handler),
        )
        .await;
        let uri = format!("/api/organizations/{}/follow", org.id);
        let cookie = Cookie::new("sbr-session", token);

        let req = test::TestRequest::post()
            .uri(&uri)
            .cookie(cookie.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri(&uri)
            .cookie(cookie.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/organizations/{}/follow-status", org.id))
            .cookie(cookie.clone())
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["isFollowing"], true);

        let req = test::TestRequest::delete()
            .uri(&uri)
            .cookie(cookie.clone())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::delete().uri(&uri).cookie(cookie).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_anonymous_callers() {
        let store = InMemoryOrganizations::default();
        let org = store.add(sample_organization("Pawn Shop Games"));
        let state = TestAppStateBuilder::default()
            .with_organizations(store)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(follow_organization_handler)
                .service(follow_status_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/organizations/{}/follow", org.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["message"], "Authentication required");

        let req = test::TestRequest::get()
            .uri(&format!("/api/organizations/{}/follow-status", org.id))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["isFollowing"], false);
    }

    #[actix_web::test]
    async fn test_follow_status_fails_when_session_lookup_fails() {
        let sessions = InMemorySessions::default();
        let token = sign_in(&sessions, sample_user().id);
        let store = InMemoryOrganizations::default();
        let org = store.add(sample_organization("Pawn Shop Games"));
        let state = TestAppStateBuilder::default()
            .with_users(InMemoryUsers::failing())
            .with_sessions(sessions)
            .with_organizations(store)
            .build();
        let app = test::init_service(App::new().app_data(state).service(follow_status_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/organizations/{}/follow-status", org.id))
            .cookie(Cookie::new("sbr-session", token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
