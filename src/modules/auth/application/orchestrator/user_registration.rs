use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::domain::entities::User;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, ICreateUserUseCase,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailRecipient, UserEmailNotifier,
};

const EMAIL_RETRIES: u32 = 3;

#[derive(Debug)]
pub struct UserRegistrationOutput {
    pub user: User,
    pub message: String,
}

/// Creates the account, then sends the verification email in the background.
/// Email delivery never fails the registration.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
    retry_base: Duration,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        email_service: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            email_service,
            retry_base: Duration::from_millis(500),
        }
    }

    /// First retry waits `base`, each further retry doubles it.
    pub fn with_retry_base(mut self, base: Duration) -> Self {
        self.retry_base = base;
        self
    }

    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, CreateUserError> {
        let created = self.create_user_use_case.execute(input).await?;

        let email_service = self.email_service.clone();
        let retry_base = self.retry_base;
        let user_id = created.user.id;
        let recipient = EmailRecipient {
            email: created.user.email.clone(),
            first_name: created.user.first_name.clone(),
        };
        let token = created.verification_token.clone();

        tokio::spawn(async move {
            let mut attempt = 0;
            loop {
                match email_service
                    .send_verification_email(&recipient, &token)
                    .await
                {
                    Ok(_) => return,
                    Err(e) if attempt < EMAIL_RETRIES => {
                        let delay = retry_base * 2_u32.pow(attempt);
                        attempt += 1;
                        tracing::warn!(
                            %user_id,
                            attempt,
                            error = %e,
                            "Verification email failed, retrying in {:?}",
                            delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                    Err(e) => {
                        tracing::error!(%user_id, error = %e, "Giving up on verification email");
                        return;
                    }
                }
            }
        });

        Ok(UserRegistrationOutput {
            user: created.user,
            message: "User created successfully. Please check your email to verify your account."
                .to_string(),
        })
    }
}
