#[derive(Debug, Clone)]
pub struct EmailRecipient {
    pub email: String,
    pub first_name: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Account lifecycle emails sent to end users.
#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        recipient: &EmailRecipient,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_welcome_email(
        &self,
        recipient: &EmailRecipient,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_password_reset_email(
        &self,
        recipient: &EmailRecipient,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;
}
