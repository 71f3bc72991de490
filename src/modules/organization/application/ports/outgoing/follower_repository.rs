use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FollowerRepositoryError {
    #[error("Already following")]
    AlreadyFollowing,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FollowerRepository: Send + Sync {
    async fn is_following(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<bool, FollowerRepositoryError>;

    async fn follow(&self, user_id: Uuid, organization_id: Uuid)
        -> Result<(), FollowerRepositoryError>;

    /// Returns whether a row was removed.
    async fn unfollow(
        &self,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<bool, FollowerRepositoryError>;
}
