use crate::email::application::ports::outgoing::email_sender::{
    EmailSendError, EmailSender, OutgoingEmail,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

pub const SENDGRID_MAIL_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Debug, Serialize, PartialEq)]
struct SendGridAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
struct Personalization {
    to: Vec<SendGridAddress>,
    dynamic_template_data: Value,
}

#[derive(Debug, Serialize, PartialEq)]
struct SendGridPayload {
    personalizations: Vec<Personalization>,
    from: SendGridAddress,
    template_id: String,
}

/// Delivers dynamic-template emails through the SendGrid v3 HTTP API.
pub struct SendGridEmailSender {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl SendGridEmailSender {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(api_key, SENDGRID_MAIL_SEND_URL)
    }

    pub fn with_endpoint(api_key: Option<String>, endpoint: &str) -> Self {
        if api_key.is_none() {
            tracing::warn!("SendGrid API key not found. Email delivery will fail until configured.");
        }

        Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: endpoint.to_string(),
        }
    }

    fn build_payload(email: OutgoingEmail) -> Result<SendGridPayload, EmailSendError> {
        let template = email
            .template
            .ok_or_else(|| EmailSendError::Unconfigured("Email template not configured".into()))?;

        Ok(SendGridPayload {
            personalizations: vec![Personalization {
                to: vec![SendGridAddress {
                    email: email.to,
                    name: None,
                }],
                dynamic_template_data: template.data,
            }],
            from: SendGridAddress {
                email: email.from.email,
                name: email.from.name,
            },
            template_id: template.id,
        })
    }
}

#[async_trait]
impl EmailSender for SendGridEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| EmailSendError::Unconfigured("SendGrid API key not configured".into()))?;

        let payload = Self::build_payload(email)?;
        let body = serde_json::to_vec(&payload)
            .map_err(|e| EmailSendError::DeliveryFailed(e.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| EmailSendError::DeliveryFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(EmailSendError::DeliveryFailed(format!(
                "SendGrid responded with {status}: {detail}"
            )));
        }

        Ok(())
    }
}
