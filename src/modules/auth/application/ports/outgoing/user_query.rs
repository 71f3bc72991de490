// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt user row: {0}")]
    InvalidRow(String),
}

/// Read side of the user store. Email arguments are expected in normalized
/// (trimmed, lowercased) form.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<User>, UserQueryError>;
    async fn find_by_password_reset_token(
        &self,
        token_hash: &str,
    ) -> Result<Option<User>, UserQueryError>;
    /// Every user, newest first.
    async fn list_all(&self) -> Result<Vec<User>, UserQueryError>;
}
