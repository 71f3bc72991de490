use async_trait::async_trait;

use crate::organization::application::domain::entities::OrganizationSummary;
use crate::organization::application::ports::outgoing::OrganizationQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListOrganizationsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<OrganizationQueryError> for ListOrganizationsError {
    fn from(err: OrganizationQueryError) -> Self {
        match err {
            OrganizationQueryError::DatabaseError(msg) => ListOrganizationsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait ListOrganizationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<OrganizationSummary>, ListOrganizationsError>;
}
