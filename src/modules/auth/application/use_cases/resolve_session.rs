use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{SessionRepository, UserQuery};
use crate::auth::application::services::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("Session lookup failed: {0}")]
    Internal(String),
}

/// Maps a bearer token to its user. `Ok(None)` covers every "not signed in"
/// case: unknown token, expired session, deleted or deactivated user.
#[async_trait]
pub trait IResolveSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<Option<User>, ResolveSessionError>;
}

#[derive(Clone)]
pub struct ResolveSessionUseCase<Q, S>
where
    Q: UserQuery,
    S: SessionRepository,
{
    query: Q,
    sessions: S,
}

impl<Q, S> ResolveSessionUseCase<Q, S>
where
    Q: UserQuery,
    S: SessionRepository,
{
    pub fn new(query: Q, sessions: S) -> Self {
        Self { query, sessions }
    }
}

#[async_trait]
impl<Q, S> IResolveSessionUseCase for ResolveSessionUseCase<Q, S>
where
    Q: UserQuery,
    S: SessionRepository,
{
    async fn execute(&self, token: &str) -> Result<Option<User>, ResolveSessionError> {
        if token.is_empty() {
            return Ok(None);
        }

        let token_hash = hash_token(token);
        let session = self
            .sessions
            .find_by_token_hash(&token_hash)
            .await
            .map_err(|e| ResolveSessionError::Internal(e.to_string()))?;

        let Some(session) = session else {
            return Ok(None);
        };

        if session.is_expired_at(Utc::now()) {
            debug!(user_id = %session.user_id, "Removing expired session");
            if let Err(e) = self.sessions.delete_by_token_hash(&token_hash).await {
                warn!(user_id = %session.user_id, error = %e, "Failed to delete expired session");
            }
            return Ok(None);
        }

        let user = self
            .query
            .find_by_id(session.user_id)
            .await
            .map_err(|e| ResolveSessionError::Internal(e.to_string()))?;

        Ok(user.filter(|u| !u.is_blocked()))
    }
}
