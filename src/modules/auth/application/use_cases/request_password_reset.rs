use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::policies::normalize_email;
use crate::auth::application::ports::outgoing::{TokenGenerator, UserQuery, UserRepository};
use crate::auth::application::services::hash_token;
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailRecipient, UserEmailNotifier,
};

pub const PASSWORD_RESET_MESSAGE: &str =
    "If an account with that email exists, a password reset link has been sent.";

const RESET_TOKEN_TTL_HOURS: i64 = 1;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Never reveals whether the email belongs to an account.
#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError>;
}

#[derive(Clone)]
pub struct RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    token_generator: Arc<dyn TokenGenerator>,
    notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R> RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        token_generator: Arc<dyn TokenGenerator>,
        notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            query,
            repository,
            token_generator,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IRequestPasswordResetUseCase for RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, email: &str) -> Result<(), RequestPasswordResetError> {
        let Ok(email) = normalize_email(email) else {
            return Ok(());
        };

        let user = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| RequestPasswordResetError::Internal(e.to_string()))?;

        let Some(user) = user else {
            info!(email = %email, "Password reset requested for unknown email");
            return Ok(());
        };

        let token = self.token_generator.generate();
        let expires_at = Utc::now() + Duration::hours(RESET_TOKEN_TTL_HOURS);

        self.repository
            .set_password_reset(user.id, hash_token(&token), expires_at)
            .await
            .map_err(|e| RequestPasswordResetError::Internal(e.to_string()))?;

        let recipient = EmailRecipient {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
        };
        if let Err(e) = self
            .notifier
            .send_password_reset_email(&recipient, &token)
            .await
        {
            warn!(user_id = %user.id, error = %e, "Password reset email failed");
        }

        Ok(())
    }
}
