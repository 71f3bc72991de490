use async_trait::async_trait;
use uuid::Uuid;

use crate::organization::application::domain::entities::OrganizationDetail;
use crate::organization::application::ports::incoming::use_cases::{
    GetOrganizationError, GetOrganizationUseCase,
};
use crate::organization::application::ports::outgoing::OrganizationQuery;

/// Assembles an organization with its venues, events and followers.
pub struct GetOrganizationService<Q>
where
    Q: OrganizationQuery,
{
    query: Q,
}

impl<Q> GetOrganizationService<Q>
where
    Q: OrganizationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetOrganizationUseCase for GetOrganizationService<Q>
where
    Q: OrganizationQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<OrganizationDetail, GetOrganizationError> {
        let organization = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(GetOrganizationError::NotFound)?;

        let (venues, events, followers) = futures::try_join!(
            self.query.venues_of(id),
            self.query.events_of(id),
            self.query.followers_of(id),
        )?;

        Ok(OrganizationDetail {
            organization,
            venues,
            events,
            followers,
        })
    }
}
