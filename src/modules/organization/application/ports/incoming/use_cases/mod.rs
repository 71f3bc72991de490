pub mod follow_organization;
pub mod get_organization;
pub mod list_organizations;
pub mod manage_organization;

pub use follow_organization::{FollowError, FollowOrganizationUseCase};
pub use get_organization::{GetOrganizationError, GetOrganizationUseCase};
pub use list_organizations::{ListOrganizationsError, ListOrganizationsUseCase};
pub use manage_organization::{ManageOrganizationError, ManageOrganizationUseCase};
