use crate::api::schemas::SuccessResponse;
use crate::event::application::domain::entities::EventListing;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct EventListResponse {
    pub events: Vec<EventListing>,
}

/// Active public events, soonest first
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    responses(
        (status = 200, description = "Public events with organization, venue and attendees", body = inline(SuccessResponse<EventListResponse>)),
    )
)]
#[get("/api/events")]
pub async fn list_events_handler(data: web::Data<AppState>) -> impl Responder {
    match data.events.list_public.execute().await {
        Ok(events) => ApiResponse::success(EventListResponse { events }),
        Err(e) => {
            error!(error = %e, "Failed to list events");
            ApiResponse::internal_error()
        }
    }
}
