use async_trait::async_trait;
use uuid::Uuid;

use crate::organization::application::domain::entities::OrganizationDetail;
use crate::organization::application::ports::outgoing::OrganizationQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetOrganizationError {
    #[error("Organization not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrganizationQueryError> for GetOrganizationError {
    fn from(err: OrganizationQueryError) -> Self {
        match err {
            OrganizationQueryError::DatabaseError(msg) => GetOrganizationError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetOrganizationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<OrganizationDetail, GetOrganizationError>;
}
