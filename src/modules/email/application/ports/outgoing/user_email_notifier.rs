use super::email_sender::EmailSendError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Email not configured: {0}")]
    Unconfigured(String),

    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

impl From<EmailSendError> for UserEmailNotificationError {
    fn from(err: EmailSendError) -> Self {
        match err {
            EmailSendError::Unconfigured(msg) => Self::Unconfigured(msg),
            other => Self::EmailSendingFailed(other.to_string()),
        }
    }
}

/// Verification and welcome notifications. The caller decides whether a
/// failure matters.
#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        email: &str,
        username: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError>;

    async fn send_welcome_email(
        &self,
        email: &str,
        username: &str,
    ) -> Result<(), UserEmailNotificationError>;
}
