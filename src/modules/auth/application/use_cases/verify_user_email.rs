use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository, UserRepositoryError};
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailRecipient, UserEmailNotifier,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyUserEmailError {
    #[error("Invalid or expired verification token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
pub trait IVerifyUserEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<User, VerifyUserEmailError>;
}

#[derive(Clone)]
pub struct VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R> VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(query: Q, repository: R, notifier: Arc<dyn UserEmailNotifier>) -> Self {
        Self {
            query,
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IVerifyUserEmailUseCase for VerifyUserEmailUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, token: &str) -> Result<User, VerifyUserEmailError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(VerifyUserEmailError::InvalidToken);
        }

        let user = self
            .query
            .find_by_verification_token(token)
            .await
            .map_err(|e| VerifyUserEmailError::Internal(e.to_string()))?
            .ok_or(VerifyUserEmailError::InvalidToken)?;

        let verified = self
            .repository
            .mark_email_verified(user.id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => VerifyUserEmailError::InvalidToken,
                other => VerifyUserEmailError::Internal(other.to_string()),
            })?;

        info!(user_id = %verified.id, "Email verified");

        let notifier = self.notifier.clone();
        let recipient = EmailRecipient {
            email: verified.email.clone(),
            first_name: verified.first_name.clone(),
        };
        tokio::spawn(async move {
            if let Err(e) = notifier.send_welcome_email(&recipient).await {
                warn!(email = %recipient.email, error = %e, "Welcome email failed");
            }
        });

        Ok(verified)
    }
}
