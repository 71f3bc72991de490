use async_trait::async_trait;
use uuid::Uuid;

use crate::organization::application::domain::entities::{
    NewOrganization, Organization, OrganizationChanges,
};
use crate::organization::application::ports::outgoing::OrganizationRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ManageOrganizationError {
    #[error("{0}")]
    Validation(String),

    #[error("Organization not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<OrganizationRepositoryError> for ManageOrganizationError {
    fn from(err: OrganizationRepositoryError) -> Self {
        match err {
            OrganizationRepositoryError::NotFound => ManageOrganizationError::NotFound,
            OrganizationRepositoryError::DatabaseError(msg) => {
                ManageOrganizationError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait ManageOrganizationUseCase: Send + Sync {
    async fn create(&self, input: NewOrganization)
        -> Result<Organization, ManageOrganizationError>;
    async fn update(
        &self,
        id: Uuid,
        changes: OrganizationChanges,
    ) -> Result<Organization, ManageOrganizationError>;
    async fn delete(&self, id: Uuid) -> Result<(), ManageOrganizationError>;
}
