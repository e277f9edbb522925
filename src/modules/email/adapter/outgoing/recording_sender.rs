use crate::email::application::ports::outgoing::email_sender::{
    EmailSendError, EmailSender, OutgoingEmail,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory transport that keeps every message instead of delivering it.
/// Can be switched into a failing mode to exercise error paths.
#[derive(Clone, Default)]
pub struct RecordingEmailSender {
    sent_emails: Arc<Mutex<Vec<OutgoingEmail>>>,
    failure: Arc<Mutex<Option<EmailSendError>>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: EmailSendError) -> Self {
        let sender = Self::default();
        sender.fail_with(Some(err));
        sender
    }

    pub fn fail_with(&self, err: Option<EmailSendError>) {
        if let Ok(mut failure) = self.failure.lock() {
            *failure = err;
        }
    }

    pub fn sent_emails(&self) -> Vec<OutgoingEmail> {
        self.sent_emails
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send_email(&self, email: OutgoingEmail) -> Result<(), EmailSendError> {
        let failure = self
            .failure
            .lock()
            .map_err(|e| EmailSendError::DeliveryFailed(e.to_string()))?
            .clone();
        if let Some(err) = failure {
            return Err(err);
        }

        self.sent_emails
            .lock()
            .map_err(|e| EmailSendError::DeliveryFailed(e.to_string()))?
            .push(email);
        Ok(())
    }
}
