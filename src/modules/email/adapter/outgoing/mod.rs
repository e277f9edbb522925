pub mod recording_sender;
pub mod sendgrid_sender;
pub mod smtp_sender;
