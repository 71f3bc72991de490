use async_trait::async_trait;

use crate::organization::application::domain::entities::OrganizationSummary;
use crate::organization::application::ports::incoming::use_cases::{
    ListOrganizationsError, ListOrganizationsUseCase,
};
use crate::organization::application::ports::outgoing::OrganizationQuery;

pub struct ListOrganizationsService<Q>
where
    Q: OrganizationQuery,
{
    query: Q,
}

impl<Q> ListOrganizationsService<Q>
where
    Q: OrganizationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListOrganizationsUseCase for ListOrganizationsService<Q>
where
    Q: OrganizationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<OrganizationSummary>, ListOrganizationsError> {
        self.query
            .list_with_counts()
            .await
            .map_err(ListOrganizationsError::from)
    }
}
