use async_trait::async_trait;
use uuid::Uuid;

use crate::organization::application::ports::outgoing::{
    FollowerRepositoryError, OrganizationQueryError,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FollowError {
    #[error("Organization not found")]
    OrganizationNotFound,

    #[error("Already following this organization")]
    AlreadyFollowing,

    #[error("Not following this organization")]
    NotFollowing,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<FollowerRepositoryError> for FollowError {
    fn from(err: FollowerRepositoryError) -> Self {
        match err {
            FollowerRepositoryError::AlreadyFollowing => FollowError::AlreadyFollowing,
            FollowerRepositoryError::DatabaseError(msg) => FollowError::Internal(msg),
        }
    }
}

impl From<OrganizationQueryError> for FollowError {
    fn from(err: OrganizationQueryError) -> Self {
        FollowError::Internal(err.to_string())
    }
}

#[async_trait]
pub trait FollowOrganizationUseCase: Send + Sync {
    async fn follow(&self, user_id: Uuid, organization_id: Uuid) -> Result<(), FollowError>;
    async fn unfollow(&self, user_id: Uuid, organization_id: Uuid) -> Result<(), FollowError>;
    async fn is_following(&self, user_id: Uuid, organization_id: Uuid)
        -> Result<bool, FollowError>;
}
