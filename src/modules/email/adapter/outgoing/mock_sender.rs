use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tracing::info;

use crate::email::application::ports::outgoing::email_sender::{EmailMessage, EmailSender};

/// Used when no SMTP host is configured. Emails are logged and kept in memory.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent_emails: Arc<Mutex<Vec<EmailMessage>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent_emails
            .lock()
            .map(|emails| emails.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), String> {
        info!(to = %message.to, subject = %message.subject, "Email not sent (no SMTP configured)");

        self.sent_emails
            .lock()
            .map_err(|e| e.to_string())?
            .push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_sent_emails() {
        let sender = MockEmailSender::new();
        let message = EmailMessage {
            to: "player@example.com".to_string(),
            subject: "Hello".to_string(),
            html_body: "<p>Hi</p>".to_string(),
            text_body: "Hi".to_string(),
        };

        sender.send_email(&message).await.unwrap();

        assert_eq!(sender.sent_emails(), vec![message]);
    }
}
