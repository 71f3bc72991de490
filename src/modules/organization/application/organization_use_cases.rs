use std::sync::Arc;

use crate::organization::application::ports::incoming::use_cases::{
    FollowOrganizationUseCase, GetOrganizationUseCase, ListOrganizationsUseCase,
    ManageOrganizationUseCase,
};

#[derive(Clone)]
pub struct OrganizationUseCases {
    pub list: Arc<dyn ListOrganizationsUseCase + Send + Sync>,
    pub get: Arc<dyn GetOrganizationUseCase + Send + Sync>,
    pub follow: Arc<dyn FollowOrganizationUseCase + Send + Sync>,
    pub manage: Arc<dyn ManageOrganizationUseCase + Send + Sync>,
}
