use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::error;

use crate::auth::adapter::incoming::web::session_cookie::session_token;
use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::policies::is_admin;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The user owning the request's `sbr-session` cookie.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Like [`CurrentUser`], but a missing or stale session yields `None`.
/// A failed session lookup still rejects the request with 500.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<User>);

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

async fn lookup(state: Option<web::Data<AppState>>, token: &str) -> Result<Option<User>, ActixError> {
    let state = state.ok_or_else(|| create_api_error(ApiResponse::internal_error()))?;

    state.auth.resolve_session.execute(token).await.map_err(|e| {
        error!(error = %e, "Session lookup failed");
        create_api_error(ApiResponse::internal_error())
    })
}

async fn resolve(state: Option<web::Data<AppState>>, token: Option<String>) -> Result<User, ActixError> {
    let token = token.ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "UNAUTHORIZED",
            "Not authenticated",
        ))
    })?;

    lookup(state, &token).await?.ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "UNAUTHORIZED",
            "Invalid session",
        ))
    })
}

impl FromRequest for CurrentUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = session_token(req);

        Box::pin(async move { resolve(state, token).await.map(CurrentUser) })
    }
}

impl FromRequest for OptionalUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = session_token(req);

        Box::pin(async move {
            match token {
                Some(token) => lookup(state, &token).await.map(OptionalUser),
                None => Ok(OptionalUser(None)),
            }
        })
    }
}

/// A signed-in user whose role passes `is_admin`. Checked on every request.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = session_token(req);

        Box::pin(async move {
            let user = resolve(state, token).await?;
            if !is_admin(&user.role) {
                return Err(create_api_error(ApiResponse::forbidden(
                    "FORBIDDEN",
                    "Admin access required",
                )));
            }
            Ok(AdminUser(user))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::test_fixtures::sample_user;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::in_memory::{InMemorySessions, InMemoryUsers};
    use crate::tests::support::sign_in;
    use actix_web::{cookie::Cookie, get, http::StatusCode, test, App, HttpResponse, Responder};

    #[get("/whoami")]
    async fn whoami(user: CurrentUser) -> impl Responder {
        HttpResponse::Ok().body(user.0.email)
    }

    #[get("/maybe")]
    async fn maybe(user: OptionalUser) -> impl Responder {
        HttpResponse::Ok().body(if user.0.is_some() { "yes" } else { "no" })
    }

    #[get("/admin-only")]
    async fn admin_only(admin: AdminUser) -> impl Responder {
        HttpResponse::Ok().body(admin.0.role)
    }

    async fn error_message(resp: actix_web::dev::ServiceResponse) -> String {
        let body: serde_json::Value = test::read_body_json(resp).await;
        body["error"]["message"].as_str().unwrap_or_default().to_string()
    }

    #[actix_web::test]
    async fn test_missing_cookie_is_not_authenticated() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(whoami)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_message(resp).await, "Not authenticated");
    }

    #[actix_web::test]
    async fn test_unknown_token_is_invalid_session() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(whoami)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new("sbr-session", "nope"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_message(resp).await, "Invalid session");
    }

    #[actix_web::test]
    async fn test_valid_session_resolves_user() {
        let user = sample_user();
        let sessions = InMemorySessions::default();
        let token = sign_in(&sessions, user.id);
        let state = TestAppStateBuilder::default()
            .with_users(InMemoryUsers::with(vec![user]))
            .with_sessions(sessions)
            .build();
        let app = test::init_service(App::new().app_data(state).service(whoami).service(maybe)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new("sbr-session", token.clone()))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "player@example.com");

        let req = test::TestRequest::get()
            .uri("/maybe")
            .cookie(Cookie::new("sbr-session", token))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "yes");

        let req = test::TestRequest::get().uri("/maybe").to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "no");

        let req = test::TestRequest::get()
            .uri("/maybe")
            .cookie(Cookie::new("sbr-session", "stale"))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "no");
    }

    #[actix_web::test]
    async fn test_optional_user_surfaces_lookup_failure() {
        let sessions = InMemorySessions::default();
        let token = sign_in(&sessions, sample_user().id);
        let state = TestAppStateBuilder::default()
            .with_users(InMemoryUsers::failing())
            .with_sessions(sessions)
            .build();
        let app = test::init_service(App::new().app_data(state).service(maybe)).await;

        let req = test::TestRequest::get()
            .uri("/maybe")
            .cookie(Cookie::new("sbr-session", token))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_admin_extractor_rejects_end_users() {
        let user = sample_user();
        let mut admin = sample_user();
        admin.id = uuid::Uuid::new_v4();
        admin.email = "boss@example.com".to_string();
        admin.role = "venue_admin".to_string();

        let sessions = InMemorySessions::default();
        let user_token = sign_in(&sessions, user.id);
        let admin_token = sign_in(&sessions, admin.id);
        let state = TestAppStateBuilder::default()
            .with_users(InMemoryUsers::with(vec![user, admin]))
            .with_sessions(sessions)
            .build();
        let app = test::init_service(App::new().app_data(state).service(admin_only)).await;

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .cookie(Cookie::new("sbr-session", user_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(error_message(resp).await, "Admin access required");

        let req = test::TestRequest::get()
            .uri("/admin-only")
            .cookie(Cookie::new("sbr-session", admin_token))
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "venue_admin");
    }
}
