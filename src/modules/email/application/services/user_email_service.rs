use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::email_sender::{EmailMessage, EmailSender};
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailRecipient, UserEmailNotificationError, UserEmailNotifier,
};

const BRAND: &str = "SBR - Social Board Gaming";
const TAGLINE: &str = "Connect with board game enthusiasts and discover new games";

/// Renders account emails and hands them to an [`EmailSender`].
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    web_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("web_url", &self.web_url)
            .finish()
    }
}

struct Template {
    subject: &'static str,
    heading: &'static str,
    paragraphs: Vec<String>,
    action: Option<(&'static str, String)>,
    footnote: Option<&'static str>,
}

impl Template {
    fn render(self, to: &str) -> EmailMessage {
        let mut html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;"><h1 style="color: #2563eb;">{}</h1>"#,
            self.heading
        );
        let mut text = format!("{}\n\n", self.heading);

        for paragraph in &self.paragraphs {
            html.push_str(&format!("<p>{}</p>", paragraph));
            text.push_str(&format!("{}\n\n", paragraph));
        }

        if let Some((label, link)) = &self.action {
            html.push_str(&format!(
                r#"<p style="text-align: center; margin: 30px 0;"><a href="{link}" style="background-color: #2563eb; color: white; padding: 12px 24px; text-decoration: none; border-radius: 6px;">{label}</a></p><p style="word-break: break-all; color: #6b7280;">{link}</p>"#
            ));
            text.push_str(&format!("{}: {}\n\n", label, link));
        }

        if let Some(note) = self.footnote {
            html.push_str(&format!("<p>{}</p>", note));
            text.push_str(&format!("{}\n\n", note));
        }

        html.push_str(&format!(
            r#"<hr style="margin: 30px 0; border: none; border-top: 1px solid #e5e7eb;"><p style="color: #6b7280; font-size: 14px;">{BRAND}<br>{TAGLINE}</p></div>"#
        ));
        text.push_str(&format!("{BRAND}\n{TAGLINE}\n"));

        EmailMessage {
            to: to.to_string(),
            subject: self.subject.to_string(),
            html_body: html,
            text_body: text,
        }
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, web_url: &str) -> Self {
        Self {
            sender,
            web_url: web_url.trim_end_matches('/').to_string(),
        }
    }

    fn verification_message(&self, recipient: &EmailRecipient, token: &str) -> EmailMessage {
        Template {
            subject: "Verify your SBR account",
            heading: "Welcome to SBR!",
            paragraphs: vec![
                format!("Hi {},", recipient.first_name),
                "Thanks for creating an SBR account. Please confirm your email address to finish signing up.".to_string(),
            ],
            action: Some((
                "Verify Email Address",
                format!("{}/verify-email?token={}", self.web_url, token),
            )),
            footnote: Some("If you didn't create an account with SBR, you can ignore this email."),
        }
        .render(&recipient.email)
    }

    fn welcome_message(&self, recipient: &EmailRecipient) -> EmailMessage {
        Template {
            subject: "Welcome to SBR!",
            heading: "Welcome to SBR!",
            paragraphs: vec![
                format!("Hi {},", recipient.first_name),
                "Your email is verified. Find game nights near you, follow your favourite venues and discover new games.".to_string(),
                "Happy gaming!".to_string(),
            ],
            action: Some(("Get Started", format!("{}/dashboard", self.web_url))),
            footnote: None,
        }
        .render(&recipient.email)
    }

    fn password_reset_message(&self, recipient: &EmailRecipient, token: &str) -> EmailMessage {
        Template {
            subject: "Reset your SBR password",
            heading: "Password Reset Request",
            paragraphs: vec![
                format!("Hi {},", recipient.first_name),
                "We received a request to reset the password for your SBR account.".to_string(),
            ],
            action: Some((
                "Reset Password",
                format!("{}/reset-password?token={}", self.web_url, token),
            )),
            footnote: Some(
                "This link expires in 1 hour. If you didn't ask for a reset, you can ignore this email.",
            ),
        }
        .render(&recipient.email)
    }

    async fn deliver(&self, message: EmailMessage) -> Result<(), UserEmailNotificationError> {
        self.sender
            .send_email(&message)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        recipient: &EmailRecipient,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.deliver(self.verification_message(recipient, token))
            .await
    }

    async fn send_welcome_email(
        &self,
        recipient: &EmailRecipient,
    ) -> Result<(), UserEmailNotificationError> {
        self.deliver(self.welcome_message(recipient)).await
    }

    async fn send_password_reset_email(
        &self,
        recipient: &EmailRecipient,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.deliver(self.password_reset_message(recipient, token))
            .await
    }
}
