use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Mailbox {
    pub email: String,
    pub name: Option<String>,
}

/// Provider-side template, rendered remotely from `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderTemplate {
    pub id: String,
    pub data: Value,
}

/// A fully prepared message. Transports that support provider templates use
/// `template`; the rest deliver `html_body`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: Mailbox,
    pub subject: String,
    pub html_body: String,
    pub template: Option<ProviderTemplate>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmailSendError {
    #[error("Email transport not configured: {0}")]
    Unconfigured(String),

    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    #[error("Email delivery failed: {0}")]
    DeliveryFailed(String),
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError>;
}
