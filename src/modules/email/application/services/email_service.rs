use crate::config::MailConfig;
use crate::email::application::ports::outgoing::email_sender::{
    EmailSender, Mailbox, OutgoingEmail, ProviderTemplate,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotificationError, UserEmailNotifier,
};
use async_trait::async_trait;
use serde_json::json;
use std::fmt;
use std::sync::Arc;

const APP_NAME: &str = "Email Verification System";

/// Builds verification and welcome emails from [`MailConfig`] and hands them
/// to the configured transport.
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    config: MailConfig,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_base_url", &self.config.app_base_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, config: MailConfig) -> Self {
        Self { sender, config }
    }

    fn from_mailbox(&self) -> Mailbox {
        Mailbox {
            email: self.config.from_email.clone(),
            name: Some(self.config.from_name.clone()),
        }
    }

    fn verification_email(&self, email: &str, username: &str, token: &str) -> OutgoingEmail {
        let link = self.config.verification_link(username, token);

        let html_body = format!(
            "<h2>Welcome to {APP_NAME}, {username}!</h2>\
             <p>Please confirm your email address by clicking the link below:</p>\
             <p><a href=\"{link}\">Verify my email</a></p>\
             <p>If you did not create this account you can ignore this message.</p>"
        );

        OutgoingEmail {
            to: email.to_string(),
            from: self.from_mailbox(),
            subject: "Verify your email address".to_string(),
            html_body,
            template: self
                .config
                .verification_template_id
                .as_ref()
                .map(|id| ProviderTemplate {
                    id: id.clone(),
                    data: json!({
                        "username": username,
                        "verification_link": link,
                        "app_name": APP_NAME,
                        "app_base_url": self.config.app_base_url,
                    }),
                }),
        }
    }

    fn welcome_email(&self, email: &str, username: &str) -> OutgoingEmail {
        let profile_url = self.config.profile_url();

        let html_body = format!(
            "<h2>Your email is verified, {username}!</h2>\
             <p>Thanks for confirming your address. You can now visit your \
             <a href=\"{profile_url}\">profile</a>.</p>"
        );

        OutgoingEmail {
            to: email.to_string(),
            from: self.from_mailbox(),
            subject: format!("Welcome to {APP_NAME}"),
            html_body,
            template: self
                .config
                .welcome_template_id
                .as_ref()
                .map(|id| ProviderTemplate {
                    id: id.clone(),
                    data: json!({
                        "username": username,
                        "app_name": APP_NAME,
                        "app_url": self.config.app_base_url,
                        "profile_url": profile_url,
                    }),
                }),
        }
    }
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let message = self.verification_email(email, username, token);
        let template_id = message.template.as_ref().map(|t| t.id.clone());

        self.sender.send_email(message).await?;

        tracing::info!(
            username = %username,
            template_id = ?template_id,
            "Verification email sent"
        );
        Ok(())
    }

    async fn send_welcome_email(
        &self,
        email: &str,
        username: &str,
    ) -> Result<(), UserEmailNotificationError> {
        let message = self.welcome_email(email, username);
        let template_id = message.template.as_ref().map(|t| t.id.clone());

        self.sender.send_email(message).await?;

        tracing::info!(
            username = %username,
            template_id = ?template_id,
            "Welcome email sent"
        );
        Ok(())
    }
}
