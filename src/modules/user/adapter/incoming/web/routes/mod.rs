pub mod check_verification;
pub mod register_user;
pub mod resend_verification;
pub mod user_response;
pub mod verify_email;

pub use check_verification::check_verification_handler;
pub use register_user::register_user_handler;
pub use resend_verification::resend_verification_handler;
pub use verify_email::verify_email_handler;
