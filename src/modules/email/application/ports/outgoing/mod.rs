pub mod email_sender;
pub mod user_email_notifier;

pub use email_sender::{EmailSendError, EmailSender, Mailbox, OutgoingEmail, ProviderTemplate};
pub use user_email_notifier::{UserEmailNotificationError, UserEmailNotifier};
