use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::organization::application::domain::entities::{OrganizationDetail, OrganizationSummary};
use crate::organization::application::ports::incoming::use_cases::GetOrganizationError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct OrganizationListResponse {
    pub organizations: Vec<OrganizationSummary>,
}

#[derive(Serialize, ToSchema)]
pub struct OrganizationDetailResponse {
    pub organization: OrganizationDetail,
}

/// List organizations with follower, event and venue counts
#[utoipa::path(
    get,
    path = "/api/organizations",
    tag = "organizations",
    responses(
        (status = 200, description = "Organizations ordered by name", body = inline(SuccessResponse<OrganizationListResponse>)),
    )
)]
#[get("/api/organizations")]
pub async fn list_organizations_handler(data: web::Data<AppState>) -> impl Responder {
    match data.organizations.list.execute().await {
        Ok(organizations) => ApiResponse::success(OrganizationListResponse { organizations }),
        Err(e) => {
            error!(error = %e, "Failed to list organizations");
            ApiResponse::internal_error()
        }
    }
}

/// Organization with venues, events and followers
#[utoipa::path(
    get,
    path = "/api/organizations/{id}",
    tag = "organizations",
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Organization detail", body = inline(SuccessResponse<OrganizationDetailResponse>)),
        (status = 404, description = "Organization not found", body = ErrorResponse),
    )
)]
#[get("/api/organizations/{id}")]
pub async fn get_organization_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let organization_id = path.into_inner();
    match data.organizations.get.execute(organization_id).await {
        Ok(organization) => ApiResponse::success(OrganizationDetailResponse { organization }),
        Err(GetOrganizationError::NotFound) => {
            ApiResponse::not_found("NOT_FOUND", "Organization not found")
        }
        Err(GetOrganizationError::QueryFailed(e)) => {
            error!(%organization_id, error = %e, "Failed to load organization");
            ApiResponse::internal_error()
        }
    }
}
