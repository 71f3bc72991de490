use async_trait::async_trait;
use uuid::Uuid;

use crate::organization::application::domain::entities::{
    Organization, OrganizationEvent, OrganizationFollower, OrganizationSummary, Venue,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum OrganizationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait OrganizationQuery: Send + Sync {
    /// Every organization ordered by name, with follower/event/venue counts.
    async fn list_with_counts(&self) -> Result<Vec<OrganizationSummary>, OrganizationQueryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, OrganizationQueryError>;
    async fn venues_of(&self, id: Uuid) -> Result<Vec<Venue>, OrganizationQueryError>;
    async fn events_of(&self, id: Uuid) -> Result<Vec<OrganizationEvent>, OrganizationQueryError>;
    async fn followers_of(
        &self,
        id: Uuid,
    ) -> Result<Vec<OrganizationFollower>, OrganizationQueryError>;
}
