pub mod check_verification_status;
pub mod register_user;
pub mod resend_verification;
pub mod verify_user_email;

pub use check_verification_status::{
    CheckVerificationStatusError, CheckVerificationStatusUseCase, ICheckVerificationStatusUseCase,
    VerificationStatusOutput,
};
pub use register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserUseCase,
};
pub use resend_verification::{
    IResendVerificationUseCase, ResendVerificationError, ResendVerificationUseCase,
};
pub use verify_user_email::{
    IVerifyUserEmailUseCase, VerifyUserEmailError, VerifyUserEmailUseCase,
};
