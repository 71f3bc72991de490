use async_trait::async_trait;
use uuid::Uuid;

use crate::organization::application::domain::entities::{
    NewOrganization, Organization, OrganizationChanges,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrganizationRepositoryError {
    #[error("Organization not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn create(&self, input: NewOrganization)
        -> Result<Organization, OrganizationRepositoryError>;
    async fn update(
        &self,
        id: Uuid,
        changes: OrganizationChanges,
    ) -> Result<Organization, OrganizationRepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), OrganizationRepositoryError>;
}
