use crate::modules::auth::application::domain::entities::{NewUser, StatusTransition, User};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    /// Sets the verified flag, clears the one-time token and promotes a
    /// `PENDING_VERIFICATION` account to `ACTIVE`.
    async fn mark_email_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError>;

    async fn record_login(
        &self,
        user_id: Uuid,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: Uuid,
        update: UserProfileUpdate,
    ) -> Result<User, UserRepositoryError>;

    /// Replaces the hash and clears any pending reset token.
    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn set_password_reset(
        &self,
        user_id: Uuid,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    async fn apply_status_transition(
        &self,
        user_id: Uuid,
        transition: &StatusTransition,
    ) -> Result<User, UserRepositoryError>;

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserRepositoryError {
    UserAlreadyExists,
    UserNotFound,
    DatabaseError(String),
}

#[cfg(not(tarpaulin_include))]
impl fmt::Display for UserRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRepositoryError::UserNotFound => write!(f, "User not found"),
            UserRepositoryError::UserAlreadyExists => write!(f, "User already exists"),
            UserRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for UserRepositoryError {}
