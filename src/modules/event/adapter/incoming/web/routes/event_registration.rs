use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::CurrentUser;
use crate::event::application::domain::entities::Registration;
use crate::event::application::ports::incoming::use_cases::RegistrationError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub message: String,
    pub registration: Registration,
}

#[derive(Serialize, ToSchema)]
pub struct CancelRegistrationResponse {
    pub message: String,
}

fn map_registration_error(err: RegistrationError, event_id: Uuid) -> HttpResponse {
    match err {
        RegistrationError::EventNotFound => ApiResponse::not_found("NOT_FOUND", "Event not found"),
        RegistrationError::EventClosed => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        RegistrationError::AlreadyRegistered => {
            ApiResponse::conflict("CONFLICT", &err.to_string())
        }
        RegistrationError::NotRegistered => ApiResponse::not_found("NOT_FOUND", &err.to_string()),
        RegistrationError::Internal(e) => {
            error!(%event_id, error = %e, "Event registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register the caller for an event; joins the waitlist when the event is full
#[utoipa::path(
    post,
    path = "/api/events/{id}/register",
    tag = "events",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 201, description = "Registered", body = inline(SuccessResponse<RegistrationResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Already registered", body = ErrorResponse),
    )
)]
#[post("/api/events/{id}/register")]
pub async fn register_for_event_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let CurrentUser(user) = user;
    let event_id = path.into_inner();

    match data.events.registration.register(event_id, user.id).await {
        Ok(registration) => {
            info!(%event_id, user_id = %user.id, status = %registration.status, "Event registration");
            ApiResponse::created(RegistrationResponse {
                message: "Successfully registered for event".to_string(),
                registration,
            })
        }
        Err(e) => map_registration_error(e, event_id),
    }
}

/// Cancel the caller's registration
#[utoipa::path(
    delete,
    path = "/api/events/{id}/register",
    tag = "events",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "Event id")),
    responses(
        (status = 200, description = "Registration cancelled", body = inline(SuccessResponse<CancelRegistrationResponse>)),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Not registered", body = ErrorResponse),
    )
)]
#[delete("/api/events/{id}/register")]
pub async fn cancel_registration_handler(
    user: CurrentUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let CurrentUser(user) = user;
    let event_id = path.into_inner();

    match data.events.registration.cancel(event_id, user.id).await {
        Ok(()) => ApiResponse::success(CancelRegistrationResponse {
            message: "Registration cancelled".to_string(),
        }),
        Err(e) => map_registration_error(e, event_id),
    }
}
