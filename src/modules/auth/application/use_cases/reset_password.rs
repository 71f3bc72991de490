use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::ports::incoming::PasswordPolicy;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, SessionRepository, UserQuery, UserRepository,
};
use crate::auth::application::services::hash_token;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("Invalid or expired reset token")]
    InvalidToken,

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError>;
}

#[derive(Clone)]
pub struct ResetPasswordUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    query: Q,
    repository: R,
    sessions: S,
    password_hasher: Arc<dyn PasswordHasher>,
    password_policy: Arc<dyn PasswordPolicy>,
}

impl<Q, R, S> ResetPasswordUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        sessions: S,
        password_hasher: Arc<dyn PasswordHasher>,
        password_policy: Arc<dyn PasswordPolicy>,
    ) -> Self {
        Self {
            query,
            repository,
            sessions,
            password_hasher,
            password_policy,
        }
    }
}

#[async_trait]
impl<Q, R, S> IResetPasswordUseCase for ResetPasswordUseCase<Q, R, S>
where
    Q: UserQuery,
    R: UserRepository,
    S: SessionRepository,
{
    async fn execute(&self, token: &str, new_password: &str) -> Result<(), ResetPasswordError> {
        if token.trim().is_empty() {
            return Err(ResetPasswordError::InvalidToken);
        }

        self.password_policy
            .validate(new_password)
            .map_err(|e| ResetPasswordError::Validation(e.to_string()))?;

        let user = self
            .query
            .find_by_password_reset_token(&hash_token(token.trim()))
            .await
            .map_err(|e| ResetPasswordError::Internal(e.to_string()))?
            .ok_or(ResetPasswordError::InvalidToken)?;

        let still_valid = user
            .password_reset_expires
            .is_some_and(|expires| expires > Utc::now());
        if !still_valid {
            return Err(ResetPasswordError::InvalidToken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(new_password)
            .await
            .map_err(|e| ResetPasswordError::Internal(e.to_string()))?;

        self.repository
            .update_password(user.id, password_hash)
            .await
            .map_err(|e| ResetPasswordError::Internal(e.to_string()))?;

        match self.sessions.delete_all_for_user(user.id).await {
            Ok(count) => info!(user_id = %user.id, sessions = count, "Password reset"),
            Err(e) => warn!(user_id = %user.id, error = %e, "Password reset but sessions not cleared"),
        }

        Ok(())
    }
}
