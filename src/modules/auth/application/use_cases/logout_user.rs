use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::ports::outgoing::SessionRepository;
use crate::auth::application::services::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Failed to end session: {0}")]
    Internal(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    /// Ending an unknown session succeeds silently.
    async fn execute(&self, token: &str) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    sessions: S,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(sessions: S) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl<S> ILogoutUseCase for LogoutUseCase<S>
where
    S: SessionRepository,
{
    async fn execute(&self, token: &str) -> Result<(), LogoutError> {
        if token.is_empty() {
            return Ok(());
        }

        let removed = self
            .sessions
            .delete_by_token_hash(&hash_token(token))
            .await
            .map_err(|e| LogoutError::Internal(e.to_string()))?;

        debug!(removed, "Session ended");
        Ok(())
    }
}
