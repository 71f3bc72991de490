pub mod admin_organizations;
pub mod follow_organization;
pub mod public_organizations;

pub use admin_organizations::{
    admin_list_organizations_handler, create_organization_handler, delete_organization_handler,
    update_organization_handler, OrganizationDeletedResponse, OrganizationMutationResponse,
    OrganizationRequest,
};
pub use follow_organization::{
    follow_organization_handler, follow_status_handler, unfollow_organization_handler,
    FollowResponse, FollowStatusResponse,
};
pub use public_organizations::{
    get_organization_handler, list_organizations_handler, OrganizationDetailResponse,
    OrganizationListResponse,
};

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_organizations_handler)
        .service(get_organization_handler)
        .service(follow_organization_handler)
        .service(unfollow_organization_handler)
        .service(follow_status_handler)
        .service(admin_list_organizations_handler)
        .service(create_organization_handler)
        .service(update_organization_handler)
        .service(delete_organization_handler);
}
