pub mod follow_organization_service;
pub mod get_organization_service;
pub mod list_organizations_service;
pub mod manage_organization_service;

pub use follow_organization_service::FollowOrganizationService;
pub use get_organization_service::GetOrganizationService;
pub use list_organizations_service::ListOrganizationsService;
pub use manage_organization_service::ManageOrganizationService;
