use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::organization::adapter::incoming::web::routes::public_organizations::OrganizationListResponse;
use crate::organization::application::domain::entities::{
    NewOrganization, Organization, OrganizationChanges,
};
use crate::organization::application::ports::incoming::use_cases::ManageOrganizationError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub banner_image: Option<String>,
    pub allow_multi_venue: Option<bool>,
    pub enable_followers: Option<bool>,
    pub enable_public_events: Option<bool>,
    pub enable_messaging: Option<bool>,
}

impl OrganizationRequest {
    fn into_new(self) -> NewOrganization {
        NewOrganization {
            name: self.name.unwrap_or_default(),
            description: self.description,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            phone: self.phone,
            email: self.email,
            website: self.website,
            logo: self.logo,
            allow_multi_venue: self.allow_multi_venue,
            enable_followers: self.enable_followers,
            enable_public_events: self.enable_public_events,
            enable_messaging: self.enable_messaging,
        }
    }

    fn into_changes(self) -> OrganizationChanges {
        OrganizationChanges {
            name: self.name,
            description: self.description,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            phone: self.phone,
            email: self.email,
            website: self.website,
            logo: self.logo,
            banner_image: self.banner_image,
            allow_multi_venue: self.allow_multi_venue,
            enable_followers: self.enable_followers,
            enable_public_events: self.enable_public_events,
            enable_messaging: self.enable_messaging,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct OrganizationMutationResponse {
    pub message: String,
    pub organization: Organization,
}

#[derive(Serialize, ToSchema)]
pub struct OrganizationDeletedResponse {
    pub message: String,
}

fn map_manage_error(err: ManageOrganizationError, organization_id: Option<Uuid>) -> HttpResponse {
    match err {
        ManageOrganizationError::Validation(msg) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        ManageOrganizationError::NotFound => {
            ApiResponse::not_found("NOT_FOUND", "Organization not found")
        }
        ManageOrganizationError::RepositoryError(e) => {
            error!(organization_id = ?organization_id, error = %e, "Organization write failed");
            ApiResponse::internal_error()
        }
    }
}

/// Admin list of organizations
#[utoipa::path(
    get,
    path = "/api/admin/organizations",
    tag = "admin-organizations",
    security(("SessionCookie" = [])),
    responses(
        (status = 200, description = "Organizations with counts", body = inline(SuccessResponse<OrganizationListResponse>)),
        (status = 403, description = "Admin access required", body = ErrorResponse),
    )
)]
#[get("/api/admin/organizations")]
pub async fn admin_list_organizations_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.organizations.list.execute().await {
        Ok(organizations) => ApiResponse::success(OrganizationListResponse { organizations }),
        Err(e) => {
            error!(error = %e, "Failed to list organizations");
            ApiResponse::internal_error()
        }
    }
}

/// Create an organization
#[utoipa::path(
    post,
    path = "/api/admin/organizations",
    tag = "admin-organizations",
    security(("SessionCookie" = [])),
    request_body = OrganizationRequest,
    responses(
        (status = 201, description = "Organization created", body = inline(SuccessResponse<OrganizationMutationResponse>)),
        (status = 400, description = "Name missing", body = ErrorResponse),
    )
)]
#[post("/api/admin/organizations")]
pub async fn create_organization_handler(
    admin: AdminUser,
    req: web::Json<OrganizationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.organizations.manage.create(req.into_inner().into_new()).await {
        Ok(organization) => {
            info!(admin_id = %admin.0.id, organization_id = %organization.id, "Admin created organization");
            ApiResponse::created(OrganizationMutationResponse {
                message: "Organization created successfully".to_string(),
                organization,
            })
        }
        Err(e) => map_manage_error(e, None),
    }
}

/// Partially update an organization
#[utoipa::path(
    put,
    path = "/api/admin/organizations/{id}",
    tag = "admin-organizations",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "Organization id")),
    request_body = OrganizationRequest,
    responses(
        (status = 200, description = "Organization updated", body = inline(SuccessResponse<OrganizationMutationResponse>)),
        (status = 404, description = "Organization not found", body = ErrorResponse),
    )
)]
#[put("/api/admin/organizations/{id}")]
pub async fn update_organization_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<OrganizationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let organization_id = path.into_inner();
    match data
        .organizations
        .manage
        .update(organization_id, req.into_inner().into_changes())
        .await
    {
        Ok(organization) => ApiResponse::success(OrganizationMutationResponse {
            message: "Organization updated successfully".to_string(),
            organization,
        }),
        Err(e) => map_manage_error(e, Some(organization_id)),
    }
}

/// Delete an organization with its venues, events and followers
#[utoipa::path(
    delete,
    path = "/api/admin/organizations/{id}",
    tag = "admin-organizations",
    security(("SessionCookie" = [])),
    params(("id" = Uuid, Path, description = "Organization id")),
    responses(
        (status = 200, description = "Organization deleted", body = inline(SuccessResponse<OrganizationDeletedResponse>)),
        (status = 404, description = "Organization not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/organizations/{id}")]
pub async fn delete_organization_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let organization_id = path.into_inner();
    match data.organizations.manage.delete(organization_id).await {
        Ok(()) => {
            info!(admin_id = %admin.0.id, %organization_id, "Admin deleted organization");
            ApiResponse::success(OrganizationDeletedResponse {
                message: "Organization deleted successfully".to_string(),
            })
        }
        Err(e) => map_manage_error(e, Some(organization_id)),
    }
}
