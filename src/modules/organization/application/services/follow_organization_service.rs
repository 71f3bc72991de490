use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::organization::application::ports::incoming::use_cases::{
    FollowError, FollowOrganizationUseCase,
};
use crate::organization::application::ports::outgoing::{FollowerRepository, OrganizationQuery};

pub struct FollowOrganizationService<Q, F>
where
    Q: OrganizationQuery,
    F: FollowerRepository,
{
    query: Q,
    followers: F,
}

impl<Q, F> FollowOrganizationService<Q, F>
where
    Q: OrganizationQuery,
    F: FollowerRepository,
{
    pub fn new(query: Q, followers: F) -> Self {
        Self { query, followers }
    }

    async fn ensure_exists(&self, organization_id: Uuid) -> Result<(), FollowError> {
        match self.query.find_by_id(organization_id).await? {
            Some(_) => Ok(()),
            None => Err(FollowError::OrganizationNotFound),
        }
    }
}

#[async_trait]
impl<Q, F> FollowOrganizationUseCase for FollowOrganizationService<Q, F>
where
    Q: OrganizationQuery + Send + Sync,
    F: FollowerRepository + Send + Sync,
{
    async fn follow(&self, user_id: Uuid, organization_id: Uuid) -> Result<(), FollowError> {
        self.ensure_exists(organization_id).await?;

        if self.followers.is_following(user_id, organization_id).await? {
            return Err(FollowError::AlreadyFollowing);
        }

        self.followers.follow(user_id, organization_id).await?;
        info!(%user_id, %organization_id, "Organization followed");
        Ok(())
    }

    async fn unfollow(&self, user_id: Uuid, organization_id: Uuid) -> Result<(), FollowError> {
        if !self.followers.unfollow(user_id, organization_id).await? {
            return Err(FollowError::NotFollowing);
        }

        info!(%user_id, %organization_id, "Organization unfollowed");
        Ok(())
    }

    async fn is_following(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<bool, FollowError> {
        Ok(self.followers.is_following(user_id, organization_id).await?)
    }
}
