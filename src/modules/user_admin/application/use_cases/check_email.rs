use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckEmailError {
    #[error("Failed to check email: {0}")]
    Internal(String),
}

#[async_trait]
pub trait ICheckEmailUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<bool, CheckEmailError>;
}

#[derive(Clone)]
pub struct CheckEmailUseCase<Q: UserQuery> {
    query: Q,
}

impl<Q: UserQuery> CheckEmailUseCase<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: UserQuery> ICheckEmailUseCase for CheckEmailUseCase<Q> {
    async fn execute(&self, email: &str) -> Result<bool, CheckEmailError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Ok(false);
        }

        self.query
            .find_by_email(&email)
            .await
            .map(|user| user.is_some())
            .map_err(|e| CheckEmailError::Internal(e.to_string()))
    }
}
