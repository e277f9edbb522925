use crate::email::application::ports::outgoing::email_sender::{
    EmailSendError, EmailSender, Mailbox as SenderMailbox, OutgoingEmail,
};
use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

/// Sends the locally rendered HTML body over SMTP. Provider templates are ignored.
pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Plain SMTP without TLS, for local catchers such as Mailpit or MailHog.
    pub fn new_local(host: &str, port: u16, credentials: Option<(String, String)>) -> Self {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(port);
        if let Some((username, password)) = credentials {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Self {
            mailer: Box::new(builder.build()),
        }
    }

    fn mailbox(address: &SenderMailbox) -> Result<Mailbox, EmailSendError> {
        let email = address
            .email
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("{}: {}", address.email, e)))?;
        Ok(Mailbox::new(address.name.clone(), email))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        let to = Self::mailbox(&SenderMailbox {
            email: email.to.clone(),
            name: None,
        })?;

        let message = Message::builder()
            .from(Self::mailbox(&email.from)?)
            .to(to)
            .subject(email.subject)
            .header(ContentType::TEXT_HTML)
            .body(email.html_body)
            .map_err(|e| EmailSendError::DeliveryFailed(e.to_string()))?;

        self.mailer
            .send(message)
            .await
            .map_err(EmailSendError::DeliveryFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct CapturingMailer {
        sent: Arc<Mutex<Vec<Message>>>,
    }

    #[async_trait]
    impl Mailer for CapturingMailer {
        async fn send(&self, email: Message) -> Result<(), String> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            Err("connection refused".to_string())
        }
    }

    struct UnreachableMailer;

    #[async_trait]
    impl Mailer for UnreachableMailer {
        async fn send(&self, _: Message) -> Result<(), String> {
            panic!("Should not reach mailer when an address is invalid");
        }
    }

    fn outgoing(to: &str, from: &str) -> OutgoingEmail {
        OutgoingEmail {
            to: to.to_string(),
            from: SenderMailbox {
                email: from.to_string(),
                name: Some("Email Verification".to_string()),
            },
            subject: "Verify your email address".to_string(),
            html_body: "<p>Verify</p>".to_string(),
            template: None,
        }
    }

    #[tokio::test]
    async fn test_send_email_success() {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let sender = SmtpEmailSender::new_with_mailer(Box::new(CapturingMailer {
            sent: Arc::clone(&sent),
        }));

        let result = sender
            .send_email(outgoing("alice@x.com", "no-reply@example.com"))
            .await;

        assert!(result.is_ok(), "Expected Ok, got {:?}", result);
        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let raw = String::from_utf8(sent[0].formatted()).unwrap();
        assert!(raw.contains("To: alice@x.com"));
        assert!(raw.contains("Subject: Verify your email address"));
    }

    #[tokio::test]
    async fn test_invalid_recipient_is_rejected() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer));

        let result = sender
            .send_email(outgoing("not-an-email", "no-reply@example.com"))
            .await;

        assert!(matches!(result, Err(EmailSendError::InvalidAddress(msg)) if msg.contains("not-an-email")));
    }

    #[tokio::test]
    async fn test_invalid_sender_is_rejected() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(UnreachableMailer));

        let result = sender
            .send_email(outgoing("alice@x.com", "invalid-from-email"))
            .await;

        assert!(matches!(result, Err(EmailSendError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_transport_failure_is_delivery_failure() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(FailingMailer));

        let result = sender
            .send_email(outgoing("alice@x.com", "no-reply@example.com"))
            .await;

        assert_eq!(
            result,
            Err(EmailSendError::DeliveryFailed("connection refused".to_string()))
        );
    }
}
